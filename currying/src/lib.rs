//! Currying for statically typed procedures.
//!
//! [`curry`] turns a procedure of `N` parameters into a [`Curry`] state that takes its arguments
//! one at a time ([`Curry::apply`]) or several at once ([`Apply::apply_all`], [`call!`]). The
//! number and types of the parameters still missing are part of the state's type, so applying a
//! wrong argument, or one too many, does not compile. Once every parameter is bound the state
//! resolves to the procedure's output, as many times as asked, calling the procedure every time.
//!
//! ```ignore
//! use currying::{call, curry};
//!
//! fn add3(a: i32, b: i32, c: i32) -> i32 {
//!     a + b + c
//! }
//!
//! let add_one = curry(add3).apply(1);
//! assert_eq!(add_one.apply(2).apply(3).resolve(), 6);
//! assert_eq!(call!(&add_one, 2, 3).resolve(), 6);
//! ```

pub mod args;
#[cfg(doctest)]
pub mod compile_fail;
#[cfg(feature = "dynamic")]
pub mod dynamic;
pub mod error;
pub mod flatten;
pub mod func;
pub mod introspect;
pub mod typelevel;

// Public Re-exports
pub use args::{Append, ArgList, Params};
#[cfg(feature = "dynamic")]
pub use dynamic::{DynArg, DynCurry};
pub use error::CurryError;
pub use flatten::Apply;
pub use func::curry::{Curried, Curry, Pending, Terminal};
pub use func::{FunctionObject, Object, Procedure, ProcedureMut, ProcedureOnce};
pub use introspect::ext::CurryExt;
pub use introspect::{curry, curry_method, curry_object};

pub(crate) mod private {
    // sealed traits support
    pub trait Sealed {}
    impl<T: ?Sized> Sealed for T {}
}
