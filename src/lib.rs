//! # lintgate
//!
//! Composite source-code quality gate with a fixture-based check
//! verification harness.
//!
//! Analysis is delegated to black-box analyzers behind the
//! [`driver::Analyzer`] boundary; their heterogeneous error shapes are
//! normalized into one comparable [`Violation`] record. Every registered
//! check is verified differentially: a violating sample must reproduce its
//! declared expectations exactly (order-independent, multiset semantics),
//! and a clean sample must produce nothing at all.

pub mod driver;
pub mod engine;
pub mod expect;
pub mod registry;
pub mod sink;
pub mod suite;
pub mod verify;
pub mod violation;

pub use registry::{CHECKS, CheckFixture, Sample};
pub use sink::{Collector, FindingListener};
pub use suite::{CheckReport, run_check, run_suite};
pub use verify::{Mismatch, verify_clean, verify_violating};
pub use violation::{RawFinding, Violation};
