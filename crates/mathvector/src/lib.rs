//! mathvector: row and column vectors of `f64`.
//!
//! A `MathVector` is built from a two-dimensional layout that must describe
//! either a single row or a single column. It supports scaling, transposition,
//! addition, dot products, magnitude, and normalization, with mismatched
//! operands and degenerate inputs reported through `VectorError`.
//!
//! The `config` module names these operations so they can be selected from
//! configuration files and command-line tools.
pub mod config;
pub mod error;
pub mod math;

pub use config::Operation;
pub use error::{Result, VectorError};
pub use math::{MathVector, Orientation, TaggedVector};
