//! # dyn_array
//!
//! A growable, contiguous, value-semantic array with an explicit capacity
//! policy: storage doubles along powers of two and is hard-capped at
//! [`MAX_CAPACITY`] elements. Element lifetimes are managed in place over
//! raw storage, so the container works for any `T`, including types with
//! drop glue.
//!
//! ```rust
//! use dyn_array::DynArray;
//!
//! let mut values = DynArray::new();
//! values.push(10).unwrap();
//! values.push(20).unwrap();
//! values.insert(1, 15).unwrap();
//!
//! assert_eq!(values.as_slice(), &[10, 15, 20]);
//! assert!(values.capacity().is_power_of_two());
//! ```
//!
//! Fallible operations return [`DynArrayError`] and leave the container
//! untouched on failure.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod array;
#[doc(hidden)]
pub mod buffer;
pub mod error;

pub use array::DynArray;
pub use buffer::MAX_CAPACITY;
pub use error::DynArrayError;
