// src/prelude.rs
//! The “everything” import for ndvec.
//!
//! Brings you the most commonly used types and constants with one glob:
//! ```rust
//! use ndvec::prelude::*;
//! ```

// core data types
pub use crate::error::{Result, VectorError};
pub use crate::vector::{Rounded, Vector};

// basis vectors and tolerances
pub use crate::constants::{d2, d3};
pub use crate::vector::{COMPONENT_TOLERANCE, UNIT_TOLERANCE};
