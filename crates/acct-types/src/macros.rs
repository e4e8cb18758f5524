//! Helper macros for `struct Foo(Raw);` newtypes.

/// Implements construction and raw-value conversions for an identifier
/// newtype.
///
/// The raw value stays private; callers construct through `new` or `From` and
/// extract through `From` in the other direction.
#[macro_export]
macro_rules! impl_id_newtype {
    ($target:ty => $raw:ty) => {
        impl $target {
            pub const fn new(raw: $raw) -> Self {
                Self(raw)
            }
        }

        impl From<$raw> for $target {
            fn from(raw: $raw) -> Self {
                Self::new(raw)
            }
        }

        impl From<$target> for $raw {
            fn from(value: $target) -> $raw {
                value.0
            }
        }
    };
}

/// Like [`impl_id_newtype!`], but for quantity newtypes where read-only
/// access to the raw value is part of the interface, so a `Deref` impl is
/// provided too.
#[macro_export]
macro_rules! impl_quantity_newtype {
    ($target:ty => $raw:ty) => {
        $crate::impl_id_newtype! { $target => $raw }

        impl std::ops::Deref for $target {
            type Target = $raw;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}
