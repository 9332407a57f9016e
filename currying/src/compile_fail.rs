//! Misuses of [`crate::Curry`] that must be rejected by the type checker.
//!
//! Each item below carries one `compile_fail` snippet, checked by `cargo test --doc`.

/// Supplying more arguments at once than the procedure has parameters.
///
/// ```compile_fail,E0277
/// use currying::{call, curry};
///
/// fn add3(a: i32, b: i32, c: i32) -> i32 {
///     a + b + c
/// }
///
/// let _ = call!(curry(add3), 1, 2, 3, 4);
/// ```
pub struct OverApplication;

/// Applying one argument past the last parameter.
///
/// ```compile_fail,E0599
/// use currying::curry;
///
/// fn add3(a: i32, b: i32, c: i32) -> i32 {
///     a + b + c
/// }
///
/// let _ = curry(add3).apply(1).apply(2).apply(3).apply(4);
/// ```
pub struct ApplyOnTerminal;

/// Resolving through the empty call while parameters are still unbound.
///
/// ```compile_fail,E0277
/// use currying::{call, curry};
///
/// fn add3(a: i32, b: i32, c: i32) -> i32 {
///     a + b + c
/// }
///
/// let _ = call!(curry(add3).apply(1));
/// ```
pub struct EarlyEmptyCall;

/// Resolving by name while parameters are still unbound.
///
/// ```compile_fail,E0599
/// use currying::curry;
///
/// fn add3(a: i32, b: i32, c: i32) -> i32 {
///     a + b + c
/// }
///
/// let _ = curry(add3).apply(1).resolve();
/// ```
pub struct EarlyResolve;

/// Binding a value of the wrong type.
///
/// ```compile_fail,E0308
/// use currying::curry;
///
/// fn add3(a: i32, b: i32, c: i32) -> i32 {
///     a + b + c
/// }
///
/// let _ = curry(add3).apply("x");
/// ```
pub struct WrongArgumentType;

/// Grouped application with a wrongly typed element.
///
/// ```compile_fail
/// use currying::{call, curry};
///
/// fn add3(a: i32, b: i32, c: i32) -> i32 {
///     a + b + c
/// }
///
/// let _ = call!(curry(add3), 1, "two");
/// ```
pub struct WrongGroupedType;
