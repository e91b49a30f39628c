//! Core compute primitives (Vector, Matrix).
//!
//! These types provide the dense storage foundation for the diagnostic
//! pipeline: the response matrix is a row-major `Matrix<f32>` and all
//! per-item/per-student slices are `Vector<f32>`.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
