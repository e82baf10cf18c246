//! Output reporters for scan results
//!
//! One format: human-readable terminal text. The report is rendered to a
//! String so it can be asserted on in tests.

pub mod text;
