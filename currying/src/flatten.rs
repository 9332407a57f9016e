//! Supplying several arguments in one go.
//!
//! `state.apply_all((a, b, c))` is, by construction, `state.apply(a).apply(b).apply(c)`: the tuple
//! is turned into the nested list `(a, (b, (c, ())))` and [`Feed`] peels it off one
//! [`Curry::apply`] at a time, left to right. A tuple longer than the number of remaining
//! parameters, or with the wrong types, has no [`Apply`] impl and does not type-check.
//!
//! The empty tuple is only accepted by terminal states, where it resolves them.

#![allow(clippy::inline_always)]

use crate::args::{Append, ArgList};
use crate::func::curry::Curry;
use crate::func::{Procedure, ProcedureOnce};
use crate::typelevel::{Cons, Nil};

/// Application of a whole argument tuple to a [`Curry`] state.
pub trait Apply<Args> {
    type Output;

    fn apply_all(self, args: Args) -> Self::Output;
}

/// Application of a nested argument list `(a1, (a2, (.., ())))`, head first.
pub trait Feed<Nested> {
    type Output;

    fn feed(self, args: Nested) -> Self::Output;
}

/// Sugar for [`Apply::apply_all`].
///
/// `call!(state, a, b)` applies `a` then `b`; `call!(state)` resolves a terminal state. Passing
/// `&state` leaves `state` untouched.
#[macro_export]
macro_rules! call {
    ($state:expr $(,)?) => {
        $crate::flatten::Apply::apply_all($state, ())
    };
    ($state:expr, $($arg:expr),+ $(,)?) => {
        $crate::flatten::Apply::apply_all($state, ($($arg,)+))
    };
}

macro_rules! nested_ty {
    () => { () };
    ($head:ident $(, $tail:ident)*) => { ($head, nested_ty!($($tail),*)) };
}

macro_rules! nested {
    () => { () };
    ($head:ident $(, $tail:ident)*) => { ($head, nested!($($tail),*)) };
}

impl<S> Feed<()> for S {
    type Output = S;

    #[inline(always)]
    fn feed(self, (): ()) -> Self::Output {
        self
    }
}

impl<F, B, H, T, Tail> Feed<(H, Tail)> for Curry<F, B, Cons<H, T>>
where
    B: Append<H>,
    Curry<F, B::Output, T>: Feed<Tail>,
{
    type Output = <Curry<F, B::Output, T> as Feed<Tail>>::Output;

    #[inline(always)]
    fn feed(self, (head, tail): (H, Tail)) -> Self::Output {
        self.apply(head).feed(tail)
    }
}

impl<F, B: ArgList> Apply<()> for Curry<F, B, Nil>
where
    F: ProcedureOnce<B>,
{
    type Output = F::Output;

    #[inline(always)]
    fn apply_all(self, (): ()) -> Self::Output {
        self.resolve_once()
    }
}

impl<F, B: ArgList> Apply<()> for &Curry<F, B, Nil>
where
    F: Procedure<B>,
    B: Clone,
{
    type Output = <F as ProcedureOnce<B>>::Output;

    #[inline(always)]
    fn apply_all(self, (): ()) -> Self::Output {
        self.resolve()
    }
}

macro_rules! impl_apply {
    ($($A:ident $a:ident),+) => {
        impl<F, B, Rest, $($A),+> Apply<($($A,)+)> for Curry<F, B, Rest>
        where
            Self: Feed<nested_ty!($($A),+)>,
        {
            type Output = <Self as Feed<nested_ty!($($A),+)>>::Output;

            #[inline(always)]
            fn apply_all(self, ($($a,)+): ($($A,)+)) -> Self::Output {
                self.feed(nested!($($a),+))
            }
        }

        impl<F, B, Rest, $($A),+> Apply<($($A,)+)> for &Curry<F, B, Rest>
        where
            Curry<F, B, Rest>: Clone + Feed<nested_ty!($($A),+)>,
        {
            type Output = <Curry<F, B, Rest> as Feed<nested_ty!($($A),+)>>::Output;

            #[inline(always)]
            fn apply_all(self, args: ($($A,)+)) -> Self::Output {
                Curry::clone(self).apply_all(args)
            }
        }
    };
}

impl_apply!(A1 a1);
impl_apply!(A1 a1, A2 a2);
impl_apply!(A1 a1, A2 a2, A3 a3);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10, A11 a11);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10, A11 a11, A12 a12);
