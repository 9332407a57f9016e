#![allow(clippy::inline_always)]

use crate::args::Params;
use derive_more::{Deref, From};

/// A user-defined callable with exactly one call signature.
///
/// Rust does not let ordinary types implement the [`Fn`] traits, so function objects declare their
/// parameter tuple and output here instead and get curried through [`Object`].
pub trait FunctionObject {
    type Args: Params;
    type Output;

    fn call(&self, args: Self::Args) -> Self::Output;
}

/// Adapter turning a [`FunctionObject`] into a [`crate::func::Procedure`].
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Hash, Deref, From)]
#[repr(transparent)]
pub struct Object<O>(pub O);

mod impls {
    use crate::func::object::{FunctionObject, Object};
    use crate::func::{Procedure, ProcedureMut, ProcedureOnce};

    impl<O: FunctionObject> ProcedureOnce<O::Args> for Object<O> {
        type Output = O::Output;

        #[inline(always)]
        fn invoke_once(self, args: O::Args) -> Self::Output {
            self.0.call(args)
        }
    }

    impl<O: FunctionObject> ProcedureMut<O::Args> for Object<O> {
        #[inline(always)]
        fn invoke_mut(&mut self, args: O::Args) -> Self::Output {
            self.0.call(args)
        }
    }

    impl<O: FunctionObject> Procedure<O::Args> for Object<O> {
        #[inline(always)]
        fn invoke(&self, args: O::Args) -> Self::Output {
            self.0.call(args)
        }
    }
}
