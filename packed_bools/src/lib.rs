//! # packed_bools
//!
//! A growable boolean sequence that stores one element per bit, MSB-first
//! within each byte, for an 8x density improvement over byte-per-bool
//! storage.
//! The external contract mirrors [`dyn_array::DynArray`] at bit granularity:
//! doubling growth capped at [`MAX_CAPACITY`] bits, recoverable errors, and
//! value semantics.
//!
//! ```rust
//! use packed_bools::PackedBools;
//!
//! let mut bits = PackedBools::new();
//! bits.push(true).unwrap();
//! bits.push(false).unwrap();
//! bits.push(true).unwrap();
//!
//! assert_eq!(bits.len(), 3);
//! assert_eq!(bits.capacity(), 8); // one byte backs the first eight bits
//! assert_eq!(bits.iter().collect::<Vec<_>>(), [true, false, true]);
//! ```
//!
//! Insertion and removal shift the tail bit range with an overlap-safe,
//! direction-chosen copy, so sequences stay intact across byte boundaries:
//!
//! ```rust
//! use packed_bools::PackedBools;
//!
//! let mut bits = PackedBools::from_slice(&[false, true, true, false]).unwrap();
//! bits.insert(3, true).unwrap();
//! bits.remove(1).unwrap();
//!
//! assert_eq!(bits.iter().collect::<Vec<_>>(), [false, true, true, false]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod addr;
pub mod container;
pub mod error;
pub mod iter;
pub mod proxy;

mod bit_ops;

pub use addr::BitAddr;
pub use container::{MAX_CAPACITY, PackedBools};
pub use error::PackedBoolsError;
pub use iter::{Iter, IterMut};
pub use proxy::BitRef;
