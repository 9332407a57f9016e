use thiserror::Error;

/// Errors of the type-erased [`crate::dynamic::DynCurry`].
///
/// Statically typed [`crate::Curry`] states have no runtime errors at all: everything reported
/// here is a type error for them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurryError {
    /// Applying to a state that is already terminal, or resolving one that is not.
    #[error("arity mismatch: procedure takes {arity} argument(s), but {supplied} were supplied")]
    ArityMismatch { arity: usize, supplied: usize },

    /// Applying a value whose type is not the one of the next parameter.
    #[error("type mismatch for argument {position}: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        /// zero-based index of the parameter
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
}
