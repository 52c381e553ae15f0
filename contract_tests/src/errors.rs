//! Error contract tests
//!
//! Callers match on these messages in scripts and logs.
