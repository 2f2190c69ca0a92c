//! `define_port_error!` declares the error enum of a driven port.
//!
//! Each variant gets a `snake_case` constructor whose arguments accept
//! `impl Into<T>` for the field types, so adapters can write
//! `UserPersistenceError::query(err.to_string())` or pass a `&str`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Build the `" $variant "` variant."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = "Build the `" $variant "` variant."]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $( define_port_error!(@ctor $variant $( { $($field : $ty),* } )?); )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ParcelPortError {
            Unreachable => "store unreachable",
            Offline { message: String } => "offline: {message}",
            Retries { attempts: u32 } => "gave up after {attempts} attempts",
            Rejected { tracking: String, attempts: u32 } => "{tracking} rejected after {attempts}",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = ParcelPortError::offline("db down");
        assert_eq!(err.to_string(), "offline: db down");
    }

    #[test]
    fn unit_variants_take_no_arguments() {
        assert_eq!(ParcelPortError::unreachable().to_string(), "store unreachable");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        let err = ParcelPortError::retries(3_u32);
        assert_eq!(err, ParcelPortError::Retries { attempts: 3 });
    }

    #[test]
    fn mixed_fields_render_in_order() {
        let err = ParcelPortError::rejected("ABC-123", 2_u32);
        assert_eq!(err.to_string(), "ABC-123 rejected after 2");
    }
}
