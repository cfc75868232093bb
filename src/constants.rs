// src/constants.rs
//! Standard basis vectors for 2-D and 3-D space.
//!
//! The constants are lazily constructed `Vector` values, so they can be used
//! anywhere a `&Vector` is expected:
//!
//! ```rust
//! use ndvec::constants::d3;
//!
//! let normal = d3::I.cross(&d3::J)?;
//! assert_eq!(normal, *d3::K);
//! # Ok::<(), ndvec::VectorError>(())
//! ```

/// Basis vectors of the 2-D plane.
pub mod d2 {
    use once_cell::sync::Lazy;

    use crate::vector::Vector;

    /// Unit vector along the x-axis: `(1, 0)`.
    pub static I: Lazy<Vector> = Lazy::new(|| Vector::new(vec![1.0, 0.0]));

    /// Unit vector along the y-axis: `(0, 1)`.
    pub static J: Lazy<Vector> = Lazy::new(|| Vector::new(vec![0.0, 1.0]));
}

/// Basis vectors of 3-D space.
pub mod d3 {
    use once_cell::sync::Lazy;

    use crate::vector::Vector;

    /// Unit vector along the x-axis: `(1, 0, 0)`.
    pub static I: Lazy<Vector> = Lazy::new(|| Vector::new(vec![1.0, 0.0, 0.0]));

    /// Unit vector along the y-axis: `(0, 1, 0)`.
    pub static J: Lazy<Vector> = Lazy::new(|| Vector::new(vec![0.0, 1.0, 0.0]));

    /// Unit vector along the z-axis: `(0, 0, 1)`.
    pub static K: Lazy<Vector> = Lazy::new(|| Vector::new(vec![0.0, 0.0, 1.0]));
}
