//! Entry points that work out a callable's parameter list and start currying it.
//!
//! There is one constructor per callable shape, and they all produce the same [`Curry`] type, so
//! nothing downstream can tell which one was used:
//!
//! | callable                                     | constructor        |
//! |----------------------------------------------|--------------------|
//! | function item, function pointer, closure     | [`curry`]          |
//! | `Type::method` with the receiver as argument | [`curry`]          |
//! | `Type::method` with the receiver bound now   | [`curry_method`]   |
//! | [`FunctionObject`]                           | [`curry_object`]   |
//!
//! Callables with more than one signature (generic closures, overloaded function objects) cannot
//! be introspected: their parameter tuple is ambiguous and inference rejects them.

#![allow(clippy::inline_always)]

use crate::args::Params;
use crate::func::curry::{Curried, Curry};
use crate::func::{FunctionObject, Object, ProcedureOnce};
use crate::typelevel::Cons;

/// Start currying `f`, with none of its parameters bound yet.
#[inline(always)]
pub const fn curry<F, Args>(f: F) -> Curried<F, Args>
where
    F: ProcedureOnce<Args>,
    Args: Params,
{
    Curry::from_parts(f, ())
}

/// Start currying a method, binding `receiver` as its leading `self` parameter.
///
/// Methods taking `self`, `&self` or `&mut self` all work; the receiver is whatever the method's
/// first parameter is.
#[inline(always)]
pub fn curry_method<F, Args, Recv, Rest>(receiver: Recv, method: F) -> Curry<F, (Recv,), Rest>
where
    F: ProcedureOnce<Args>,
    Args: Params<List = Cons<Recv, Rest>>,
{
    curry::<F, Args>(method).apply(receiver)
}

/// Start currying a [`FunctionObject`].
#[inline(always)]
pub const fn curry_object<O>(object: O) -> Curried<Object<O>, O::Args>
where
    O: FunctionObject,
{
    curry::<Object<O>, O::Args>(Object(object))
}

pub(crate) mod ext {
    use crate::args::Params;
    use crate::func::ProcedureOnce;
    use crate::func::curry::Curried;
    use crate::private;
    use extend::ext;

    /// Trait for holding the currying extension method of every callable.
    #[ext(pub, name = CurryExt, supertraits = Sized + private::Sealed)]
    impl<F, Args> F
    where
        F: ProcedureOnce<Args>,
        Args: Params,
    {
        /// Method form of [`crate::curry`].
        fn curry(self) -> Curried<F, Args> {
            crate::curry(self)
        }
    }
}
