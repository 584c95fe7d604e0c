use dyn_array::DynArrayError;
#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by [`PackedBools`](crate::PackedBools) operations.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackedBoolsError {
    /// Checked access, insertion or removal outside the valid bit range.
    #[cfg_attr(
        feature = "std",
        error("bit index {index} out of bounds for length {len}")
    )]
    OutOfBounds { index: usize, len: usize },

    /// A capacity or length request above the hard maximum.
    #[cfg_attr(
        feature = "std",
        error("requested capacity {requested} exceeds the maximum of {max} bits")
    )]
    CapacityExceeded { requested: usize, max: usize },

    /// Failure surfaced by the backing byte storage.
    #[cfg_attr(feature = "std", error("storage error: {0}"))]
    Storage(#[cfg_attr(feature = "std", from)] DynArrayError),
}

#[cfg(not(feature = "std"))]
impl From<DynArrayError> for PackedBoolsError {
    fn from(err: DynArrayError) -> Self {
        PackedBoolsError::Storage(err)
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PackedBoolsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackedBoolsError::OutOfBounds { index, len } => {
                write!(f, "bit index {} out of bounds for length {}", index, len)
            }
            PackedBoolsError::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "requested capacity {} exceeds the maximum of {} bits",
                    requested, max
                )
            }
            PackedBoolsError::Storage(err) => write!(f, "storage error: {}", err),
        }
    }
}
