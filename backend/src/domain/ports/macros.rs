//! Macro generating port error enums with snake_case constructors.
//!
//! Each variant becomes a `thiserror` variant with the given message, plus a
//! constructor named after the variant (`Query { message }` yields
//! `query(message: impl Into<String>)`, unit variants yield `name()`).

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[must_use]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[must_use]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::domain::ports::{CredentialHashError, UserPersistenceError};

    #[rstest]
    #[case(UserPersistenceError::duplicate_username(), UserPersistenceError::DuplicateUsername)]
    #[case(UserPersistenceError::duplicate_email(), UserPersistenceError::DuplicateEmail)]
    fn constraint_variants_have_nullary_constructors(
        #[case] built: UserPersistenceError,
        #[case] expected: UserPersistenceError,
    ) {
        assert_eq!(built, expected);
    }

    #[test]
    fn message_constructors_accept_borrowed_input() {
        let err = UserPersistenceError::query("relation \"users\" does not exist");
        assert_eq!(
            err,
            UserPersistenceError::Query {
                message: "relation \"users\" does not exist".to_owned(),
            }
        );
    }

    #[rstest]
    #[case(
        UserPersistenceError::connection("timed out"),
        "user repository connection failed: timed out"
    )]
    #[case(
        UserPersistenceError::duplicate_email(),
        "email violates a uniqueness constraint"
    )]
    #[case(
        UserPersistenceError::query("syntax error"),
        "user repository query failed: syntax error"
    )]
    fn display_uses_declared_messages(#[case] err: UserPersistenceError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn hashing_errors_carry_their_message() {
        let err = CredentialHashError::hashing(String::from("memory cost too low"));
        assert_eq!(err.to_string(), "credential hashing failed: memory cost too low");
    }
}
