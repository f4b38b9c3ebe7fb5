//! Row and column vector types.
//!
//! `MathVector` stores a single flat `Vec<f64>` tagged with an
//! `Orientation`; the `layout` module converts between that representation
//! and the two-dimensional rows-of-columns form used at construction.
pub mod layout;
pub mod vector;

pub use vector::{MathVector, Orientation, TaggedVector};
