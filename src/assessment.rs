//! The risk assessment returned for one analyzed message, and the parser
//! that recovers it from a model reply.

use std::fmt;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// A metric the model may emit as either a number or a string
/// (e.g. `"risk_score": 12` vs `"risk_score": "12/100"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Number(f64),
    Text(String),
}

impl Metric {
    /// Numeric view, if there is one. String metrics are parsed leniently
    /// so `"85"` still drives the tier coloring.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Metric::Number(n) => Some(*n),
            Metric::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral scores print without a trailing ".0"
            Metric::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Metric::Number(n) => write!(f, "{}", n),
            Metric::Text(s) => f.write_str(s),
        }
    }
}

/// One structured risk verdict. Built fresh per submission, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub risk_label: String,
    pub risk_score: Metric,
    pub summary: String,
    pub red_flags: Vec<String>,
    pub evidence: Vec<String>,
    pub recommended_action: Vec<String>,
    pub confidence: Metric,
}

impl Assessment {
    /// Parse a raw model reply into an `Assessment`.
    ///
    /// The model is asked for bare JSON but occasionally wraps it in prose
    /// or fences, so: try the full text first, then fall back to the
    /// substring between the first `{` and the last `}`. If neither parses
    /// the error propagates — the reply format is not contractually
    /// guaranteed and there is nothing sensible to recover.
    pub fn from_model_text(raw: &str) -> Result<Self> {
        match serde_json::from_str(raw) {
            Ok(assessment) => Ok(assessment),
            Err(strict_err) => {
                let sliced = brace_slice(raw)
                    .ok_or_else(|| anyhow!("model reply contains no JSON object ({strict_err})"))?;
                serde_json::from_str(sliced).with_context(|| {
                    format!("model reply is not valid JSON (strict parse failed: {strict_err})")
                })
            }
        }
    }
}

/// The substring from the first `{` to the last `}`, if both exist in order.
fn brace_slice(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end >= start).then(|| &text[start..=end])
}
