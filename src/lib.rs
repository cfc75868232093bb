//! # ndvec Quickstart
//!
//! ```rust
//! use ndvec::prelude::*;
//! use ndvec::vector;
//!
//! // A displacement of (3, 4) has length 5
//! let v = vector![3.0, 4.0];
//! assert_eq!(v.magnitude(), 5.0);
//!
//! // Normalising preserves the direction and fixes the length to 1
//! let u = v.unit()?;
//! assert!(u.is_unit());
//!
//! // The 3-D basis obeys the right-hand rule: i × j = k
//! let n = d3::I.cross(&d3::J)?;
//! assert!(n.approx_eq(&d3::K));
//! # Ok::<(), VectorError>(())
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod constants;
pub mod error;
pub mod prelude;
pub mod vector;

// --- Public API exports ---

pub use error::{Result, VectorError};
pub use vector::{Rounded, Vector, COMPONENT_TOLERANCE, UNIT_TOLERANCE};
