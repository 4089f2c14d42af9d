use std::fmt;

use thiserror::Error;

/// Value-returning flag operation that failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOp {
    Add,
    Remove,
}

impl fmt::Display for FlagOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagOp::Add => f.write_str("append value to"),
            FlagOp::Remove => f.write_str("remove value from"),
        }
    }
}

/// Raised by `add_flag`/`remove_flag` when a bit pattern cannot be carried
/// through the domain's integer representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not {op} flag domain '{type_name}'")]
pub struct FlagConversionError {
    pub type_name: &'static str,
    pub op: FlagOp,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    #[error("placeholder index {index} out of range: {count} argument(s) supplied")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("malformed template at byte {position}")]
    Malformed { position: usize },
}

#[derive(Error, Debug)]
pub enum ExtError {
    #[error("{0}")]
    Flag(#[from] FlagConversionError),

    #[error("{0}")]
    Fill(#[from] FillError),

    #[error("config error: {message}")]
    Config { message: String },
}

pub type ExtResult<T> = Result<T, ExtError>;
