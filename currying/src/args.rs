//! Bound-argument lists, i.e. the tuples a partially applied procedure has accumulated so far.
//!
//! Tuples are append-only here: [`Append::append`] consumes a `k`-tuple and produces a fresh
//! `(k+1)`-tuple. Expanding a tuple into a positional call goes through the
//! [`crate::func::ProcedureOnce`] family, see [`apply`] and [`apply_ref`].

#![allow(clippy::inline_always)]

use crate::func::{Procedure, ProcedureOnce};
use crate::private;
use crate::typelevel::TypeList;
use crate::typelevel::list::type_list;

/// An ordered, fixed-length sequence of argument values.
pub trait ArgList: Sized + private::Sealed {
    /// Number of arguments in the list
    const LEN: usize;
}

/// Appending one more argument to the end of an [`ArgList`].
pub trait Append<T>: ArgList {
    type Output: ArgList;

    fn append(self, value: T) -> Self::Output;
}

/// An argument tuple viewed as a parameter list, i.e. the type-level list of its element types.
pub trait Params: ArgList {
    type List: TypeList;
}

/// Call `f` positionally with the elements of `args`, consuming both.
#[inline(always)]
pub fn apply<F, Args>(f: F, args: Args) -> F::Output
where
    F: ProcedureOnce<Args>,
    Args: ArgList,
{
    f.invoke_once(args)
}

/// Call `f` positionally with a copy of the elements of `args`, leaving both usable afterwards.
#[inline(always)]
pub fn apply_ref<F, Args>(f: &F, args: &Args) -> F::Output
where
    F: Procedure<Args>,
    Args: ArgList + Clone,
{
    f.invoke(args.clone())
}

macro_rules! impl_arg_list {
    ($len:literal; $($A:ident $a:ident),*) => {
        impl<$($A),*> ArgList for ($($A,)*) {
            const LEN: usize = $len;
        }

        impl<$($A),*> Params for ($($A,)*) {
            type List = type_list!($($A),*);
        }
    };
}

macro_rules! impl_append {
    ($($A:ident $a:ident),*) => {
        impl<$($A,)* Next> Append<Next> for ($($A,)*) {
            type Output = ($($A,)* Next,);

            #[inline(always)]
            fn append(self, value: Next) -> Self::Output {
                let ($($a,)*) = self;
                ($($a,)* value,)
            }
        }
    };
}

impl_arg_list!(0;);
impl_arg_list!(1; A1 a1);
impl_arg_list!(2; A1 a1, A2 a2);
impl_arg_list!(3; A1 a1, A2 a2, A3 a3);
impl_arg_list!(4; A1 a1, A2 a2, A3 a3, A4 a4);
impl_arg_list!(5; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_arg_list!(6; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_arg_list!(7; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_arg_list!(8; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);
impl_arg_list!(9; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9);
impl_arg_list!(10; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10);
impl_arg_list!(11; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10, A11 a11);
impl_arg_list!(12; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10, A11 a11, A12 a12);

// the 12-tuple is the largest list, so it has no successor
impl_append!();
impl_append!(A1 a1);
impl_append!(A1 a1, A2 a2);
impl_append!(A1 a1, A2 a2, A3 a3);
impl_append!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_append!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_append!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_append!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_append!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);
impl_append!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9);
impl_append!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10);
impl_append!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10, A11 a11);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_order_and_leaves_a_fresh_tuple() {
        let empty = ();
        let one = empty.append(1_u8);
        let two = one.append("two");
        let three = two.append(3.0_f64);

        assert_eq!(one, (1,));
        assert_eq!(two, (1, "two"));
        assert_eq!(three, (1, "two", 3.0));
        assert_eq!(<(u8, &str, f64) as ArgList>::LEN, 3);
    }

    #[test]
    fn params_list_has_the_tuple_length() {
        assert_eq!(<<() as Params>::List as TypeList>::LEN, 0);
        assert_eq!(<<(i32, i32, i32) as Params>::List as TypeList>::LEN, 3);
    }

    #[test]
    fn apply_expands_positionally() {
        let sub = |a: i32, b: i32| a - b;

        assert_eq!(apply(sub, (10, 3)), 7);
        assert_eq!(apply(|| "nullary", ()), "nullary");
    }

    #[test]
    fn apply_ref_leaves_arguments_reusable() {
        let concat = |a: String, b: String| a + &b;
        let args = ("foo".to_owned(), "bar".to_owned());

        assert_eq!(apply_ref(&concat, &args), "foobar");
        assert_eq!(apply_ref(&concat, &args), "foobar");
        assert_eq!(args.0, "foo");
    }
}
