// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    // Pattern matching cases - detect common pattern forms
    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { None }) => {
        match $result {
            None => {},
            other => panic!("Expected None but got {:#?}", other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    // Calls a method on a fresh instance of the subject type.
    ([$($attrs:meta)*] call, ($method:expr, $args:expr) => $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_call() {
            let registry = registry();
            let result = subject(&registry)
                .instantiate(&[])
                .and_then(|mut object| object.call($method, &$args));
            assert_case!(result, $expected);
        }
    };

    // Checks `is` against each listed type name, in order.
    ([$($attrs:meta)*] is, [$($other:expr => $expected:expr),* $(,)?]) => {
        $(#[$attrs])*
        #[test]
        fn validate_is() {
            let registry = registry();
            let ty = subject(&registry);
            $(
                let other = registry.get($other).expect("type should be registered");
                pretty_assertions::assert_eq!(ty.is(other), $expected, "is({})", $other);
            )*
        }
    };

    // Checks `has` against each listed type name, in order.
    ([$($attrs:meta)*] has, [$($other:expr => $expected:expr),* $(,)?]) => {
        $(#[$attrs])*
        #[test]
        fn validate_has() {
            let registry = registry();
            let ty = subject(&registry);
            $(
                let other = registry.get($other).expect("type should be registered");
                pretty_assertions::assert_eq!(ty.has(other), $expected, "has({})", $other);
            )*
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* call: ($($call:tt)*) => $expected:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] call, ($($call)*) => $expected}
        ] $($rest)*}
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name, registry and subject first, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        registry: $registry:expr,
        subject: $subject:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            // Types are not `Sync`, so every test builds its own registry.
            fn registry() -> lighter::Registry {
                $registry
            }

            fn subject(registry: &lighter::Registry) -> lighter::Type {
                registry
                    .get($subject)
                    .cloned()
                    .expect("subject type should be registered")
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
