//! Procedures of a fixed arity, and their partial application.
//!
//! [`ProcedureOnce`], [`ProcedureMut`] and [`Procedure`] mirror [`FnOnce`], [`FnMut`] and [`Fn`]
//! but take their arguments as one tuple, which is what lets the rest of the crate be generic over
//! arity. Every closure, function item and function pointer of up to 12 parameters implements
//! them; other callable shapes get adapters (see [`object::Object`]).

#![allow(clippy::inline_always)]

pub mod curry;
pub mod object;

pub use curry::Curry;
pub use object::{FunctionObject, Object};

pub trait ProcedureOnce<Args> {
    type Output;

    fn invoke_once(self, args: Args) -> Self::Output;
}

pub trait ProcedureMut<Args>: ProcedureOnce<Args> {
    fn invoke_mut(&mut self, args: Args) -> Self::Output;
}

pub trait Procedure<Args>: ProcedureMut<Args> {
    fn invoke(&self, args: Args) -> Self::Output;
}

mod impls {
    use crate::func::{Procedure, ProcedureMut, ProcedureOnce};

    macro_rules! impl_procedure {
        ($($A:ident $a:ident),*) => {
            impl<Func, R, $($A),*> ProcedureOnce<($($A,)*)> for Func
            where
                Func: FnOnce($($A),*) -> R,
            {
                type Output = R;

                #[inline(always)]
                fn invoke_once(self, ($($a,)*): ($($A,)*)) -> Self::Output {
                    self($($a),*)
                }
            }

            impl<Func, R, $($A),*> ProcedureMut<($($A,)*)> for Func
            where
                Func: FnMut($($A),*) -> R,
            {
                #[inline(always)]
                fn invoke_mut(&mut self, ($($a,)*): ($($A,)*)) -> Self::Output {
                    self($($a),*)
                }
            }

            impl<Func, R, $($A),*> Procedure<($($A,)*)> for Func
            where
                Func: Fn($($A),*) -> R,
            {
                #[inline(always)]
                fn invoke(&self, ($($a,)*): ($($A,)*)) -> Self::Output {
                    self($($a),*)
                }
            }
        };
    }

    impl_procedure!();
    impl_procedure!(A1 a1);
    impl_procedure!(A1 a1, A2 a2);
    impl_procedure!(A1 a1, A2 a2, A3 a3);
    impl_procedure!(A1 a1, A2 a2, A3 a3, A4 a4);
    impl_procedure!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
    impl_procedure!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
    impl_procedure!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
    impl_procedure!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);
    impl_procedure!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9);
    impl_procedure!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10);
    impl_procedure!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10, A11 a11);
    impl_procedure!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10, A11 a11, A12 a12);
}
