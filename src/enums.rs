//! Resolving enum members from strings
//!
//! Member names come from `strum`'s `AsRefStr`, member enumeration from
//! `EnumIter`. Property-assisted lookup reads `#[strum(props(...))]`, which
//! is generated at compile time.
//!
//! ```
//! use extkit::enums::{to_enum_type, to_enum_type_by_property};
//! use strum::{AsRefStr, EnumIter, EnumProperty};
//!
//! #[derive(Debug, Default, Clone, Copy, PartialEq, AsRefStr, EnumIter, EnumProperty)]
//! enum Color {
//!     #[default]
//!     Unknown,
//!     #[strum(props(Code = "R"))]
//!     Red,
//!     #[strum(props(Code = "G"))]
//!     Green,
//! }
//!
//! assert_eq!(to_enum_type::<Color>("green"), Color::Green);
//! assert_eq!(to_enum_type_by_property::<Color>("R", "Code"), Color::Red);
//! assert_eq!(to_enum_type::<Color>("mauve"), Color::Unknown);
//! ```

use strum::{EnumProperty, IntoEnumIterator};
use tracing::trace;

/// Member whose name matches `name`, ignoring ASCII case.
pub fn parse_enum<T>(name: &str) -> Option<T>
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter().find(|member| member.as_ref().eq_ignore_ascii_case(name))
}

/// [`parse_enum`], falling back to `T::default()`.
pub fn to_enum_type<T>(name: &str) -> T
where
    T: IntoEnumIterator + AsRef<str> + Default,
{
    parse_enum(name).unwrap_or_else(|| {
        trace!(name, "no member by that name, using default");
        T::default()
    })
}

/// Looks `source` up by member name first, then by the value of property
/// `key` (exact match).
pub fn parse_enum_by_property<T>(source: &str, key: &str) -> Option<T>
where
    T: IntoEnumIterator + AsRef<str> + EnumProperty,
{
    parse_enum(source).or_else(|| T::iter().find(|member| member.get_str(key) == Some(source)))
}

/// [`parse_enum_by_property`], falling back to `T::default()`.
pub fn to_enum_type_by_property<T>(source: &str, key: &str) -> T
where
    T: IntoEnumIterator + AsRef<str> + EnumProperty + Default,
{
    parse_enum_by_property(source, key).unwrap_or_else(|| {
        trace!(source, key, "no member by name or property, using default");
        T::default()
    })
}

/// Method-call form, for `"red".to_enum_type::<Color>()`.
pub trait ToEnumType {
    fn to_enum_type<T>(&self) -> T
    where
        T: IntoEnumIterator + AsRef<str> + Default;
}

impl ToEnumType for str {
    fn to_enum_type<T>(&self) -> T
    where
        T: IntoEnumIterator + AsRef<str> + Default,
    {
        to_enum_type(self)
    }
}
