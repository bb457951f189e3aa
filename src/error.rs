
//! Error type definitions.
//! Pixel access and dispatching never fail.
//! Only constructing an image from caller-provided storage can be rejected.

use std::borrow::Cow;
use std::fmt;

/// A result that may contain a raster error.
pub type Result<T> = std::result::Result<T, Error>;

/// A result that, if ok, contains nothing, and otherwise contains a raster error.
pub type UnitResult = Result<()>;


/// An error that may happen while constructing an image from existing storage.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {

    /// The provided storage does not match the described layout,
    /// for example because a plane is too short for the specified stride.
    Invalid(Cow<'static, str>),
}

impl Error {

    /// Create an error of the variant `Invalid`.
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Error::Invalid(message.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Invalid(message) => write!(formatter, "invalid image storage: {}", message),
        }
    }
}

impl std::error::Error for Error {}


/// Checks that a plane of `length` bytes can hold `rows` rows of `row_bytes` bytes at `stride`.
pub(crate) fn validate_plane(length: usize, stride: usize, row_bytes: usize, rows: usize, plane: &'static str) -> UnitResult {
    if stride < row_bytes {
        return Err(Error::invalid(format!("{} stride {} is smaller than one row of {} bytes", plane, stride, row_bytes)));
    }

    let required = if rows == 0 { 0 } else { stride * (rows - 1) + row_bytes };
    if length < required {
        return Err(Error::invalid(format!("{} has {} bytes, but at least {} are required", plane, length, required)));
    }

    Ok(())
}
