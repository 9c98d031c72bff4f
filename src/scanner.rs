//! The submission loop's core: validate input, make exactly one analyzer
//! call, hand back the verdict.

use anyhow::{Result, bail};

use crate::analyzer::{Analyzer, TokenUsage};
use crate::assessment::Assessment;

/// Wires an [`Analyzer`] to the input surface and tracks session-wide
/// token usage. One submission at a time; no state survives a submission
/// beyond the usage counter.
pub struct Scanner {
    analyzer: Box<dyn Analyzer>,
    session_usage: TokenUsage,
}

impl Scanner {
    pub fn new(analyzer: Box<dyn Analyzer>) -> Self {
        Self {
            analyzer,
            session_usage: TokenUsage::default(),
        }
    }

    /// Analyze one pasted message.
    ///
    /// Trimmed-empty input is rejected before any network call is made.
    /// Everything else goes to the analyzer exactly once; its errors
    /// (transport, malformed reply) propagate unchanged.
    pub async fn submit(&mut self, raw: &str) -> Result<Assessment> {
        if raw.trim().is_empty() {
            bail!("nothing to analyze: paste a message, email, or URL first");
        }

        // The analyzer sees the text as pasted; trimming is only for the
        // emptiness check.
        let analysis = self.analyzer.analyze(raw).await?;
        if let Some(usage) = analysis.usage {
            self.session_usage.add(usage);
        }
        Ok(analysis.assessment)
    }

    /// Total token usage across the session.
    pub fn session_usage(&self) -> TokenUsage {
        self.session_usage
    }
}
