//! Type-erased currying.
//!
//! A [`DynCurry<R>`] is a [`Curry`] state of any procedure returning `R`, with its parameter types
//! hidden. That lets procedures of different signatures sit in one collection, at the price of
//! checking arity and argument types at runtime instead of compile-time: mismatches come back as a
//! [`CurryError`].
//!
//! [`DynCurry::apply`] and [`DynCurry::apply_all`] consume the state whether or not the arguments
//! are accepted. [`DynCurry::apply_ref`] and [`DynCurry::bind`] leave it as it was on a mismatch.

#![allow(clippy::inline_always)]

use crate::args::{self, Append, ArgList};
use crate::error::CurryError;
use crate::func::Procedure;
use crate::func::curry::Curry;
use crate::typelevel::{Cons, Nil, TypeList};
use log::{debug, trace};
use std::any::{Any, type_name};
use std::fmt::{self, Debug, Formatter};

/// A curried procedure returning `R`, with the remaining parameter types checked at runtime.
pub struct DynCurry<R> {
    state: Box<dyn ErasedState<R>>,
}

/// An argument for [`DynCurry::apply_all`], remembering the name of its type for error reports.
pub struct DynArg {
    value: Box<dyn Any>,
    found: &'static str,
}

impl DynArg {
    #[inline]
    pub fn new<A: Any>(value: A) -> Self {
        Self {
            value: Box::new(value),
            found: type_name::<A>(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.found
    }
}

impl Debug for DynArg {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DynArg").field(&self.found).finish()
    }
}

/// Object-safe view of a [`Curry`] state, as stored by [`DynCurry`].
pub trait ErasedState<R> {
    fn arity(&self) -> usize;

    fn bound(&self) -> usize;

    fn remaining(&self) -> usize;

    /// # Errors
    ///
    /// See [`DynCurry::apply`].
    fn erased_apply(
        self: Box<Self>,
        arg: Box<dyn Any>,
        found: &'static str,
    ) -> Result<Box<dyn ErasedState<R>>, CurryError>;

    /// # Errors
    ///
    /// See [`DynCurry::resolve`].
    fn erased_resolve(&self) -> Result<R, CurryError>;

    fn erased_clone(&self) -> Box<dyn ErasedState<R>>;
}

/// What a [`Curry`] state can do at runtime, decided by its list of remaining parameters: a
/// [`Cons`] list takes one more argument of its head type, [`Nil`] resolves.
pub trait Step<F, B, R>: TypeList {
    /// # Errors
    ///
    /// See [`DynCurry::apply`].
    fn step(
        f: F,
        bound: B,
        arg: Box<dyn Any>,
        found: &'static str,
    ) -> Result<Box<dyn ErasedState<R>>, CurryError>;

    /// # Errors
    ///
    /// See [`DynCurry::resolve`].
    fn finish(f: &F, bound: &B) -> Result<R, CurryError>;
}

impl<F, B, Rest> Curry<F, B, Rest> {
    /// Hide the remaining parameter types behind a [`DynCurry`].
    #[inline]
    pub fn into_dyn<R>(self) -> DynCurry<R>
    where
        Self: ErasedState<R> + 'static,
    {
        DynCurry {
            state: Box::new(self),
        }
    }
}

impl<R> DynCurry<R> {
    /// Bind the next parameter.
    ///
    /// # Errors
    ///
    /// [`CurryError::ArityMismatch`] if every parameter is already bound, and
    /// [`CurryError::TypeMismatch`] if `A` is not the type of the next parameter.
    #[inline]
    pub fn apply<A: Any>(self, arg: A) -> Result<Self, CurryError> {
        self.apply_arg(DynArg::new(arg))
    }

    fn apply_arg(self, DynArg { value, found }: DynArg) -> Result<Self, CurryError> {
        let position = self.bound();
        trace!("binding argument {position} of type `{found}`");

        self.state
            .erased_apply(value, found)
            .map(|state| Self { state })
            .inspect_err(|err| debug!("rejected argument {position}: {err}"))
    }

    /// Bind several parameters at once, left to right.
    ///
    /// # Errors
    ///
    /// [`CurryError::ArityMismatch`] if there are more arguments than unbound parameters, checked
    /// before any of them is bound, and otherwise the first error of [`DynCurry::apply`].
    #[inline]
    pub fn apply_all<I>(self, args: I) -> Result<Self, CurryError>
    where
        I: IntoIterator<Item = DynArg>,
    {
        let args: Vec<DynArg> = args.into_iter().collect();
        if args.len() > self.remaining() {
            let err = CurryError::ArityMismatch {
                arity: self.arity(),
                supplied: self.bound().saturating_add(args.len()),
            };
            debug!("rejected {} arguments: {err}", args.len());
            return Err(err);
        }

        args.into_iter().try_fold(self, Self::apply_arg)
    }

    /// Bind the next parameter in place. On a mismatch this state is left as it was.
    ///
    /// # Errors
    ///
    /// See [`DynCurry::apply`].
    #[inline]
    pub fn bind<A: Any>(&mut self, arg: A) -> Result<(), CurryError> {
        *self = self.apply_ref(arg)?;
        Ok(())
    }

    /// Bind the next parameter on a copy of this state.
    ///
    /// # Errors
    ///
    /// See [`DynCurry::apply`].
    #[inline]
    pub fn apply_ref<A: Any>(&self, arg: A) -> Result<Self, CurryError> {
        self.clone().apply(arg)
    }

    /// Invoke the procedure with every bound argument. Nothing is cached.
    ///
    /// # Errors
    ///
    /// [`CurryError::ArityMismatch`] if some parameters are still unbound.
    #[inline]
    pub fn resolve(&self) -> Result<R, CurryError> {
        self.state
            .erased_resolve()
            .inspect_err(|err| debug!("refused to resolve: {err}"))
    }

    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.state.arity()
    }

    #[inline]
    #[must_use]
    pub fn bound(&self) -> usize {
        self.state.bound()
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.state.remaining()
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.remaining() == 0
    }
}

impl<R> Clone for DynCurry<R> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            state: self.state.erased_clone(),
        }
    }
}

impl<R> Debug for DynCurry<R> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynCurry")
            .field("arity", &self.arity())
            .field("remaining", &self.remaining())
            .finish_non_exhaustive()
    }
}

mod impls {
    use super::*;

    impl<F, B, Rest, R> ErasedState<R> for Curry<F, B, Rest>
    where
        F: Clone + 'static,
        B: ArgList + Clone + 'static,
        Rest: Step<F, B, R> + 'static,
    {
        #[allow(clippy::arithmetic_side_effects)]
        #[inline(always)]
        fn arity(&self) -> usize {
            B::LEN + Rest::LEN
        }

        #[inline(always)]
        fn bound(&self) -> usize {
            B::LEN
        }

        #[inline(always)]
        fn remaining(&self) -> usize {
            Rest::LEN
        }

        #[inline]
        fn erased_apply(
            self: Box<Self>,
            arg: Box<dyn Any>,
            found: &'static str,
        ) -> Result<Box<dyn ErasedState<R>>, CurryError> {
            let (f, bound) = (*self).into_parts();
            Rest::step(f, bound, arg, found)
        }

        #[inline]
        fn erased_resolve(&self) -> Result<R, CurryError> {
            Rest::finish(self.callable(), self.args())
        }

        #[inline]
        fn erased_clone(&self) -> Box<dyn ErasedState<R>> {
            Box::new(self.clone())
        }
    }

    impl<F, B, R> Step<F, B, R> for Nil
    where
        F: Procedure<B, Output = R>,
        B: ArgList + Clone,
    {
        #[allow(clippy::arithmetic_side_effects)]
        #[inline]
        fn step(
            _f: F,
            _bound: B,
            _arg: Box<dyn Any>,
            _found: &'static str,
        ) -> Result<Box<dyn ErasedState<R>>, CurryError> {
            Err(CurryError::ArityMismatch {
                arity: B::LEN,
                supplied: B::LEN + 1,
            })
        }

        #[inline]
        fn finish(f: &F, bound: &B) -> Result<R, CurryError> {
            Ok(args::apply_ref(f, bound))
        }
    }

    impl<F, B, R, H, T> Step<F, B, R> for Cons<H, T>
    where
        B: Append<H>,
        H: 'static,
        T: TypeList,
        Curry<F, B::Output, T>: ErasedState<R> + 'static,
    {
        #[inline]
        fn step(
            f: F,
            bound: B,
            arg: Box<dyn Any>,
            found: &'static str,
        ) -> Result<Box<dyn ErasedState<R>>, CurryError> {
            match arg.downcast::<H>() {
                Ok(value) => Ok(Box::new(Curry::from_parts(f, bound.append(*value)))),
                Err(_) => Err(CurryError::TypeMismatch {
                    position: B::LEN,
                    expected: type_name::<H>(),
                    found,
                }),
            }
        }

        #[allow(clippy::arithmetic_side_effects)]
        #[inline]
        fn finish(_f: &F, _bound: &B) -> Result<R, CurryError> {
            Err(CurryError::ArityMismatch {
                arity: B::LEN + Self::LEN,
                supplied: B::LEN,
            })
        }
    }
}
