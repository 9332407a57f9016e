#![allow(clippy::inline_always)]

use crate::typelevel::{Cons, Nil};
use std::marker::PhantomData;

/// Partial application of the procedure `F`.
///
/// `B` is the tuple of arguments bound so far and `Rest` is the type-level list of the parameter
/// types still waiting for a value. Every state is built by [`crate::curry`] (or one of its
/// siblings) with `B = ()`, and each [`Curry::apply`] moves the head of `Rest` over to the end of
/// `B`, so `B` followed by `Rest` is always exactly the parameter list of `F`.
///
/// Once `Rest` is [`Nil`] the state is terminal: it can no longer be applied, only resolved.
pub struct Curry<F, B, Rest> {
    f: F,
    bound: B,
    _rest: PhantomData<fn() -> Rest>,
}

/// Initial state for currying `F`, whose parameters are the tuple `Args`.
pub type Curried<F, Args> = Curry<F, (), <Args as crate::args::Params>::List>;

mod curry_impls {
    use crate::args::{self, Append, ArgList};
    use crate::func::curry::Curry;
    use crate::func::{Procedure, ProcedureMut, ProcedureOnce};
    use crate::typelevel::{Cons, Nil, TypeList};
    use std::fmt::{self, Debug, Formatter};
    use std::marker::PhantomData;

    impl<F, B, Rest> Curry<F, B, Rest> {
        #[inline(always)]
        pub(crate) const fn from_parts(f: F, bound: B) -> Self {
            Self {
                f,
                bound,
                _rest: PhantomData,
            }
        }

        /// The wrapped procedure.
        #[inline(always)]
        pub const fn callable(&self) -> &F {
            &self.f
        }

        /// The arguments bound so far, in binding order.
        #[inline(always)]
        pub const fn args(&self) -> &B {
            &self.bound
        }

        #[inline(always)]
        pub fn into_parts(self) -> (F, B) {
            (self.f, self.bound)
        }
    }

    impl<F, B: ArgList, Rest: TypeList> Curry<F, B, Rest> {
        /// Number of parameters still waiting for an argument.
        pub const REMAINING: usize = Rest::LEN;

        /// Number of arguments bound so far.
        pub const BOUND: usize = B::LEN;

        #[inline(always)]
        #[must_use]
        pub const fn remaining(&self) -> usize {
            Self::REMAINING
        }

        #[inline(always)]
        #[must_use]
        pub const fn bound(&self) -> usize {
            Self::BOUND
        }

        /// Whether every parameter has been bound, i.e. `Rest` is [`Nil`].
        #[inline(always)]
        #[must_use]
        pub const fn is_terminal(&self) -> bool {
            Self::REMAINING == 0
        }
    }

    impl<F, Rest> Curry<F, (), Rest> {
        /// Give back the procedure of a state that has nothing bound yet.
        #[inline(always)]
        pub fn uncurry(self) -> F {
            self.f
        }
    }

    impl<F, B, H, T> Curry<F, B, Cons<H, T>>
    where
        B: Append<H>,
    {
        /// Bind the next parameter, consuming this state.
        #[inline(always)]
        pub fn apply(self, arg: H) -> Curry<F, B::Output, T> {
            Curry::from_parts(self.f, self.bound.append(arg))
        }

        /// Bind the next parameter on a copy of this state, leaving this one free to be applied
        /// again with a different argument.
        #[inline(always)]
        pub fn apply_ref(&self, arg: H) -> Curry<F, B::Output, T>
        where
            F: Clone,
            B: Clone,
        {
            self.clone().apply(arg)
        }
    }

    impl<F, B: ArgList> Curry<F, B, Nil> {
        /// Invoke the procedure with every bound argument.
        ///
        /// Nothing is cached: resolving the same state twice calls the procedure twice.
        #[inline(always)]
        pub fn resolve(&self) -> <F as ProcedureOnce<B>>::Output
        where
            F: Procedure<B>,
            B: Clone,
        {
            args::apply_ref(&self.f, &self.bound)
        }

        /// Like [`Curry::resolve`], for procedures that mutate their captured state.
        #[inline(always)]
        pub fn resolve_mut(&mut self) -> <F as ProcedureOnce<B>>::Output
        where
            F: ProcedureMut<B>,
            B: Clone,
        {
            self.f.invoke_mut(self.bound.clone())
        }

        /// Like [`Curry::resolve`], handing both the procedure and the arguments over by value.
        #[inline(always)]
        pub fn resolve_once(self) -> <F as ProcedureOnce<B>>::Output
        where
            F: ProcedureOnce<B>,
        {
            args::apply(self.f, self.bound)
        }
    }

    impl<F, B, Rest> Clone for Curry<F, B, Rest>
    where
        F: Clone,
        B: Clone,
    {
        #[inline(always)]
        fn clone(&self) -> Self {
            Self::from_parts(self.f.clone(), self.bound.clone())
        }
    }

    impl<F, B, Rest> Copy for Curry<F, B, Rest>
    where
        F: Copy,
        B: Copy,
    {
    }

    impl<F, B, Rest> Debug for Curry<F, B, Rest>
    where
        B: Debug,
        Rest: TypeList,
    {
        #[inline]
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.debug_struct("Curry")
                .field("bound", &self.bound)
                .field("remaining", &Rest::LEN)
                .finish_non_exhaustive()
        }
    }
}

/// A state whose next parameter is `H`.
pub type Pending<F, B, H, T> = Curry<F, B, Cons<H, T>>;

/// A state with every parameter bound.
pub type Terminal<F, B> = Curry<F, B, Nil>;
