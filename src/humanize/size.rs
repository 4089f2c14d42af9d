//! Byte counts as `KB`/`MB`/... strings

use serde::{Deserialize, Serialize};

const SUFFIXES: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];

/// How a scaled size is rounded to a whole number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// 1.5 -> 2, 2.5 -> 3
    #[default]
    HalfAwayFromZero,
    /// 1.5 -> 2, 2.5 -> 2
    HalfToEven,
}

impl Rounding {
    fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::HalfAwayFromZero => value.round(),
            Rounding::HalfToEven => value.round_ties_even(),
        }
    }
}

/// `"N bytes"` below 1 KiB, otherwise the size in the largest binary unit up
/// to exabytes, e.g. `"3MB"`. There is no space before unit suffixes other
/// than `bytes`.
pub fn to_file_size(size: u64) -> String {
    to_file_size_with(size, Rounding::default())
}

pub fn to_file_size_with(size: u64, rounding: Rounding) -> String {
    if size < 1024 {
        return format!("{} bytes", size);
    }

    let mut unit = 0;
    let mut scale: u64 = 1024;
    while unit < SUFFIXES.len() - 1 && size >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    let scaled = rounding.apply(size as f64 / scale as f64);
    format!("{}{}", scaled as u64, SUFFIXES[unit])
}

/// Method-call form of [`to_file_size`].
pub trait ToFileSize {
    fn to_file_size(self) -> String;
}

macro_rules! impl_to_file_size {
    ($($t:ty),*) => {
        $(
            impl ToFileSize for $t {
                fn to_file_size(self) -> String {
                    to_file_size(u64::from(self))
                }
            }
        )*
    };
}

impl_to_file_size!(u8, u16, u32, u64);

impl ToFileSize for usize {
    fn to_file_size(self) -> String {
        to_file_size(self as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exabyte_ceiling() {
        assert_eq!(to_file_size(u64::MAX), "16EB");
        assert_eq!(to_file_size(1 << 60), "1EB");
    }

    #[test]
    fn test_rounding_modes_differ_on_ties() {
        assert_eq!(to_file_size_with(2560, Rounding::HalfAwayFromZero), "3KB");
        assert_eq!(to_file_size_with(2560, Rounding::HalfToEven), "2KB");
    }

    #[test]
    fn test_trait_form() {
        assert_eq!(1024u32.to_file_size(), "1KB");
        assert_eq!(12usize.to_file_size(), "12 bytes");
    }
}
