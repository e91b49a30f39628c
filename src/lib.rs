//! Evaluar: classical test theory diagnostics in pure Rust.
//!
//! Evaluar analyzes binary (correct/incorrect) assessment responses to
//! identify weak items and weak students:
//!
//! - Item difficulty (p-values) and discrimination (point-biserial correlation)
//! - Per-student weakness profiles with remediation priorities
//! - Class-level summaries (score spread, hardest/easiest items)
//!
//! # Quick Start
//!
//! ```
//! use evaluar::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let questions: Vec<String> = ["q1", "q2", "q3"].iter().map(|q| q.to_string()).collect();
//!
//! let responses: BTreeMap<String, u8> =
//!     [("q1", 1), ("q2", 1), ("q3", 0)].iter().map(|(q, s)| (q.to_string(), *s)).collect();
//! let student = StudentRecord::new("S001", responses).expect("binary responses");
//!
//! let dataset = ClassDataset::new(questions, vec![student]).expect("consistent dataset");
//! let analysis = analyze(&dataset);
//!
//! let q3 = &analysis.item_stats["q3"];
//! assert_eq!(q3.p_value, 0.0);
//! let profile = &analysis.student_profiles["S001"];
//! assert_eq!(profile.weak_questions, vec!["q3".to_string()]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`dataset`]: Validated student records and class datasets
//! - [`response`]: Dense response matrix construction
//! - [`stats`]: Point-biserial correlation and descriptive helpers
//! - [`diagnostics`]: Item statistics, weakness profiles, class summaries
//!
//! # Pipeline
//!
//! The analysis is a one-shot batch computation with a fixed stage order:
//! response matrix, then item statistics, then student profiles. Each stage
//! reads only the immutable output of the previous one, so
//! [`diagnostics::analyze`] is a pure function of the dataset.

pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod response;
pub mod stats;

pub use diagnostics::{analyze, Analysis};
pub use error::{EvaluarError, Result};
