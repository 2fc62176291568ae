//! Macro for implementing Display and FromStr for kind enums
//!
//! Event and anchor kinds cross the serialization boundary as lowercase
//! strings; this macro provides both directions from a single mapping and
//! handles case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use zoneshift_domain::impl_domain_kind_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum EventKind {
//!     Wake,
//!     Sleep,
//!     Bright,
//! }
//!
//! impl_domain_kind_conversions!(EventKind {
//!     Wake => "wake",
//!     Sleep => "sleep",
//!     Bright => "bright",
//! });
//! ```

/// Implements Display and FromStr traits for kind enums
///
/// This macro generates:
/// - Display trait: converts enum variants to lowercase strings
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations
#[macro_export]
macro_rules! impl_domain_kind_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
