#![cfg_attr(not(test), no_std)]

mod vector2;
mod vector3;

pub use vector2::Vector2;
pub use vector3::Vector3;

use core::fmt;

/// Error on normalizing a zero-length vector or projecting onto one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZeroLengthError;

impl fmt::Display for ZeroLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector has zero length")
    }
}
