pub mod gemini;
pub mod mock;
pub mod remote;

use anyhow::Result;
use async_trait::async_trait;

use crate::assessment::Assessment;

/// Token usage from a single model call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Accumulate another usage into this one.
    pub fn add(&mut self, other: TokenUsage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
    }

    /// Total tokens (input + output).
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// The result of one analysis: the verdict itself + token usage when the
/// backend reports it (the remote service variant doesn't).
pub struct Analysis {
    pub assessment: Assessment,
    pub usage: Option<TokenUsage>,
}

/// Anything that can turn pasted text into a risk verdict. Could be a
/// hosted model, a remote HTTP service, or a test script.
///
/// One attempt per call: no retry, no backoff. Transport and parse
/// failures propagate to the caller.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<Analysis>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_accumulates() {
        let mut usage = TokenUsage::default();
        usage.add(TokenUsage {
            input_tokens: 100,
            output_tokens: 20,
        });
        usage.add(TokenUsage {
            input_tokens: 50,
            output_tokens: 5,
        });
        assert_eq!(usage.input_tokens, 150);
        assert_eq!(usage.output_tokens, 25);
        assert_eq!(usage.total(), 175);
    }
}
