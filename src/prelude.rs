//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use evaluar::prelude::*;
//! ```

pub use crate::dataset::{ClassDataset, StudentRecord};
pub use crate::diagnostics::{
    analyze, Analysis, ClassSummary, Difficulty, DiscriminationQuality, ItemStatistics,
    StudentWeaknessProfile,
};
pub use crate::error::{EvaluarError, Result};
pub use crate::primitives::{Matrix, Vector};
pub use crate::response::ResponseMatrix;
