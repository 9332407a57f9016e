//! Type-level machinery: values that only exist for the type checker.

pub mod list;

pub use list::{Cons, Nil, TypeList};
