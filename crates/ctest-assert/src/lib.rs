//! Permutation-family assertions over hashable values.
//!
//! The checks in [`permutation`] decide whether one sequence is a
//! permutation, partial permutation or superset-permutation of another and
//! record which reference position each target element was matched against.
//! [`assertions`] wraps them with pass/fail progress output and diagnostic
//! messages governed by an explicit [`AssertContext`].

pub mod assertions;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod permutation;

pub use assertions::*;
pub use config::{AssertConfig, ConfigError, Verbosity};
pub use context::{AssertContext, AssertOutcome, Tally};
pub use error::{AssertError, Result};
pub use permutation::{Correspondence, Verdict};

pub use ctest_collections::Value;
