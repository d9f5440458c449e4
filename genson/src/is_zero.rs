use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

use serde_json::Value;

/// Whether a value is its type's empty state.
///
/// Members holding their empty value are skipped when a slot picks a member
/// to encode without an explicit selection. Numbers are empty at zero,
/// strings and collections when they hold nothing, options when `None`.
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

macro_rules! impl_is_zero_int {
    ($($ty:ty),*) => {
        $(
            impl IsZero for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

// No 128-bit impls: members travel through `serde_json::Value`, which holds at most 64 bits.
impl_is_zero_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// `-0.0` counts as set.
impl IsZero for f32 {
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }
}

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl IsZero for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl IsZero for () {
    fn is_zero(&self) -> bool {
        true
    }
}

impl IsZero for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> IsZero for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsZero, const N: usize> IsZero for [T; N] {
    fn is_zero(&self) -> bool {
        self.iter().all(IsZero::is_zero)
    }
}

macro_rules! impl_is_zero_collection {
    ($($ty:ident<$($param:ident),+>),*) => {
        $(
            impl<$($param),+> IsZero for $ty<$($param),+> {
                fn is_zero(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

impl_is_zero_collection!(Vec<T>, VecDeque<T>, BTreeSet<T>, BTreeMap<K, V>);

impl<T, S> IsZero for HashSet<T, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsZero for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsZero + ?Sized> IsZero for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for Rc<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for Arc<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<B> IsZero for Cow<'_, B>
where
    B: IsZero + ToOwned + ?Sized,
{
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

/// Only `null` is empty; an empty array or object was sent on purpose.
impl IsZero for Value {
    fn is_zero(&self) -> bool {
        self.is_null()
    }
}
