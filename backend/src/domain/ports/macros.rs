//! Helper macro generating port error enums.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor that
//! accepts `impl Into<_>` for every field. Variant attributes (docs included)
//! are repeated on the constructor; field attributes stay on the field.

macro_rules! define_port_error {
    (@ctor [$(#[$meta:meta])*] $variant:ident) => {
        ::paste::paste! {
            $(#[$meta])*
            #[must_use]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor [$(#[$meta:meta])*] $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            $(#[$meta])*
            #[must_use]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( {
                    $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
                } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $( $(#[$field_meta])* $field : $ty ),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(
                    @ctor [$(#[$variant_meta])*] $variant $( { $($field : $ty),* } )?
                );
            )*
        }
    };
}

pub(crate) use define_port_error;
