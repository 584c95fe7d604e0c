#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by [`DynArray`](crate::DynArray) operations.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynArrayError {
    /// Checked access, insertion or removal outside the valid index range.
    #[cfg_attr(
        feature = "std",
        error("index {index} out of bounds for length {len}")
    )]
    OutOfBounds { index: usize, len: usize },

    /// A capacity or length request above the hard maximum.
    #[cfg_attr(
        feature = "std",
        error("requested capacity {requested} exceeds the maximum of {max}")
    )]
    CapacityExceeded { requested: usize, max: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for DynArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DynArrayError::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            DynArrayError::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "requested capacity {} exceeds the maximum of {}",
                    requested, max
                )
            }
        }
    }
}
