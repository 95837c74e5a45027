pub use self::harness::*;

pub(crate) mod harness;

/// Trait for types that provide a human-readable description
///
/// Used to display enum variants in prompts and reports with friendly text
/// rather than the base identifier names for each variant.
pub trait Description {
    /// Returns a static string description of the implementing type
    fn description(&self) -> &'static str;
}

/// Creates enums with a method to ask for a user to choose a variant on the CLI
///
/// This macro generates:
/// 1. An enum with specified variants, carrying any attributes given before its name
/// 2. Standard trait implementations (Debug, Copy, Clone, etc.)
/// 3. Ord/PartialOrd/Eq/PartialEq for ordering/comparison
/// 4. [`Description`] trait implementation
/// 5. Display trait implementation
///
/// # Syntax
/// `choice!(#[attr]* EnumName, Variant => "Description", ...)`
///
/// # Example
/// ```ignore
/// choice!(ColorChoice,
///     Red => "Vibrant Red",
///     Green => "Forest Green"
/// );
///
/// let selection = ColorChoice::choice("Please select a color")
///     .expect("Failed to get user input");
/// ```
#[macro_export]
macro_rules! choice {
    ($(#[$meta:meta])* $enum_name:ident, $($variant:ident => $desc:expr),+) => {
        #[derive(Debug, Copy, Clone, inquiry::Choice, Ord, PartialOrd, Eq, PartialEq)]
        $(#[$meta])*
        pub enum $enum_name {
            $($variant,)+
        }

        impl Description for $enum_name {
            fn description(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $desc),+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.description())
            }
        }
    };
}
