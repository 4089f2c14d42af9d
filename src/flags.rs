//! Bit-flag algebra over closed integer-backed domains
//!
//! A domain opts in by implementing [`FlagDomain`], i.e. by saying how its
//! values map to and from an `i32` bit pattern. [`FlagsExt`] then supplies
//! the set operations for free.
//!
//! Queries (`has_flag`, `is_exactly`) degrade to `false` when a value does
//! not fit the bit representation. Value operations (`add_flag`,
//! `remove_flag`) have no such default and return [`FlagConversionError`].

use std::any::type_name;

use tracing::{debug, trace};

use crate::errors::{FlagConversionError, FlagOp};

/// A closed set of values backed by an `i32` bit pattern.
pub trait FlagDomain: Copy {
    /// Bit pattern of this value, `None` if it does not fit in `i32`.
    fn to_bits(self) -> Option<i32>;

    /// Value carrying exactly `bits`, `None` if the domain has no such value.
    fn from_bits(bits: i32) -> Option<Self>;
}

macro_rules! impl_flag_domain_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl FlagDomain for $t {
                fn to_bits(self) -> Option<i32> {
                    i32::try_from(self).ok()
                }

                fn from_bits(bits: i32) -> Option<Self> {
                    <$t>::try_from(bits).ok()
                }
            }
        )*
    };
}

impl_flag_domain_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Implements [`FlagDomain`] for a fieldless enum.
///
/// Every listed variant maps to its discriminant. A bit pattern converts
/// back only if it is the discriminant of one of the listed variants, so
/// combinations must be declared as members to be representable.
///
/// ```
/// use extkit::flag_domain;
/// use extkit::flags::FlagsExt;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Access {
///     None = 0,
///     Read = 1,
///     Write = 2,
///     ReadWrite = 3,
/// }
/// flag_domain!(Access { None, Read, Write, ReadWrite });
///
/// assert_eq!(Access::Read.add_flag(Access::Write), Ok(Access::ReadWrite));
/// assert!(Access::ReadWrite.has_flag(Access::Write));
/// ```
#[macro_export]
macro_rules! flag_domain {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::flags::FlagDomain for $ty {
            fn to_bits(self) -> ::core::option::Option<i32> {
                i32::try_from(self as i64).ok()
            }

            fn from_bits(bits: i32) -> ::core::option::Option<Self> {
                $(
                    if i64::from(bits) == $ty::$variant as i64 {
                        return ::core::option::Option::Some($ty::$variant);
                    }
                )+
                ::core::option::Option::None
            }
        }
    };
}

/// Set operations over any [`FlagDomain`].
pub trait FlagsExt: FlagDomain {
    /// True iff every bit of `test` is also set in `self`.
    fn has_flag(self, test: Self) -> bool {
        match (self.to_bits(), test.to_bits()) {
            (Some(flags), Some(test)) => flags & test == test,
            _ => {
                trace!(domain = type_name::<Self>(), "has_flag: value not representable");
                false
            }
        }
    }

    /// True iff both values carry the same bit pattern.
    fn is_exactly(self, test: Self) -> bool {
        match (self.to_bits(), test.to_bits()) {
            (Some(flags), Some(test)) => flags == test,
            _ => {
                trace!(domain = type_name::<Self>(), "is_exactly: value not representable");
                false
            }
        }
    }

    /// Bitwise union of `self` and `value`.
    fn add_flag(self, value: Self) -> Result<Self, FlagConversionError> {
        combine(self, value, FlagOp::Add, |flags, value| flags | value)
    }

    /// `self` with every bit of `value` cleared.
    fn remove_flag(self, value: Self) -> Result<Self, FlagConversionError> {
        combine(self, value, FlagOp::Remove, |flags, value| flags & !value)
    }
}

impl<T: FlagDomain> FlagsExt for T {}

fn combine<T: FlagDomain>(
    flags: T,
    value: T,
    op: FlagOp,
    apply: impl FnOnce(i32, i32) -> i32,
) -> Result<T, FlagConversionError> {
    let error = || FlagConversionError {
        type_name: type_name::<T>(),
        op,
    };

    let (flags, value) = match (flags.to_bits(), value.to_bits()) {
        (Some(flags), Some(value)) => (flags, value),
        _ => {
            debug!(domain = type_name::<T>(), ?op, "operand not representable");
            return Err(error());
        }
    };

    let bits = apply(flags, value);
    T::from_bits(bits).ok_or_else(|| {
        debug!(domain = type_name::<T>(), ?op, bits, "result not a member of the domain");
        error()
    })
}
