use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::assessment::{Assessment, Metric};

use super::{Analysis, Analyzer};

/// A scripted analyzer for tests. Returns pre-defined assessments in order
/// and counts how often it was invoked. The counter is shared so a test
/// can keep a handle to it after boxing the mock.
pub struct MockAnalyzer {
    results: Vec<Assessment>,
    calls: Arc<AtomicUsize>,
}

impl MockAnalyzer {
    pub fn new(results: Vec<Assessment>) -> Self {
        Self {
            results,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A shared handle to the invocation counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

/// A benign verdict for tests that don't care about field values.
pub fn benign_assessment() -> Assessment {
    Assessment {
        risk_label: "Legitimate".to_string(),
        risk_score: Metric::Number(92.0),
        summary: "Nothing suspicious found.".to_string(),
        red_flags: vec![],
        evidence: vec![],
        recommended_action: vec!["No action needed.".to_string()],
        confidence: Metric::Number(0.9),
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<Analysis> {
        let i = self.calls.fetch_add(1, Ordering::SeqCst);
        let assessment = self
            .results
            .get(i)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("MockAnalyzer: no more results (called {} times)", i + 1))?;
        Ok(Analysis {
            assessment,
            usage: None,
        })
    }
}
