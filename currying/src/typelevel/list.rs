use crate::private;
use std::marker::PhantomData;

/// The empty type-level list.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Hash)]
pub struct Nil;

/// Type-level list with head `H` and tail `T`.
///
/// Only ever used as a type, never as a value. The `fn() -> _` marker keeps it `Send`, `Sync` and
/// covariant regardless of what `H` and `T` are.
#[derive(Eq, PartialEq, Debug, Hash)]
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

/// A list of types known at compile-time, e.g. the parameters of a procedure that are still
/// waiting for an argument.
pub trait TypeList: private::Sealed {
    /// Number of types in the list
    const LEN: usize;
}

/// Builds the [`Cons`]/[`Nil`] list type out of a comma-separated sequence of types.
macro_rules! type_list {
    () => { $crate::typelevel::list::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::typelevel::list::Cons<$head, $crate::typelevel::list::type_list!($($tail),*)>
    };
}
pub(crate) use type_list;

mod impls {
    #![allow(clippy::inline_always)]

    use crate::typelevel::list::{Cons, Nil, TypeList};
    use std::marker::PhantomData;

    impl TypeList for Nil {
        const LEN: usize = 0;
    }

    #[allow(clippy::arithmetic_side_effects)]
    impl<H, T: TypeList> TypeList for Cons<H, T> {
        const LEN: usize = T::LEN + 1;
    }

    impl<H, T> Default for Cons<H, T> {
        #[inline(always)]
        fn default() -> Self {
            Self(PhantomData)
        }
    }

    impl<H, T> Clone for Cons<H, T> {
        #[inline(always)]
        fn clone(&self) -> Self {
            *self
        }
    }

    impl<H, T> Copy for Cons<H, T> {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_follow_the_list_shape() {
        assert_eq!(<Nil as TypeList>::LEN, 0);
        assert_eq!(<type_list!(u8) as TypeList>::LEN, 1);
        assert_eq!(<type_list!(u8, String, &str) as TypeList>::LEN, 3);
    }

    #[test]
    fn macro_expands_to_nested_cons() {
        fn same<T>(_: PhantomData<T>, _: PhantomData<T>) {}

        same(
            PhantomData::<type_list!(i32, bool)>,
            PhantomData::<Cons<i32, Cons<bool, Nil>>>,
        );
    }
}
