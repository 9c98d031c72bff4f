//! SafeScan: terminal scam and phishing triage.
//!
//! Paste a suspicious message, email, or URL; SafeScan sends it to a
//! generative model (or a remote analysis service) and renders the
//! returned risk assessment. All of the intelligence is external — the
//! crate is input collection, one outbound call per submission, JSON
//! parsing with a brace-trimmed fallback, and report rendering.

pub mod analyzer;
pub mod assessment;
pub mod banner;
pub mod config;
pub mod consts;
pub mod prompt;
pub mod report;
pub mod scanner;
pub mod spinner;
