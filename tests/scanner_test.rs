use std::sync::Arc;
use std::sync::atomic::Ordering;

use anyhow::Result;
use async_trait::async_trait;

use safescan::analyzer::mock::{MockAnalyzer, benign_assessment};
use safescan::analyzer::{Analysis, Analyzer, TokenUsage};
use safescan::assessment::{Assessment, Metric};
use safescan::scanner::Scanner;

fn phishing_assessment() -> Assessment {
    Assessment {
        risk_label: "High Risk (Scam/Phish)".to_string(),
        risk_score: Metric::Number(8.0),
        summary: "Urgent-payment phishing attempt.".to_string(),
        red_flags: vec!["Urgency language".to_string()],
        evidence: vec!["\"pay within 24 hours\"".to_string()],
        recommended_action: vec!["Delete the message.".to_string()],
        confidence: Metric::Number(0.97),
    }
}

#[tokio::test]
async fn non_empty_input_invokes_analyzer_exactly_once() {
    let mock = MockAnalyzer::new(vec![phishing_assessment()]);
    let counter = mock.counter();
    let mut scanner = Scanner::new(Box::new(mock));

    let assessment = scanner.submit("you have won, pay within 24 hours").await.unwrap();

    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(assessment, phishing_assessment());
}

#[tokio::test]
async fn empty_input_never_reaches_analyzer() {
    let mock = MockAnalyzer::new(vec![benign_assessment()]);
    let counter = mock.counter();
    let mut scanner = Scanner::new(Box::new(mock));

    let err = scanner.submit("").await.unwrap_err();
    assert!(err.to_string().contains("nothing to analyze"));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn whitespace_only_input_never_reaches_analyzer() {
    let mock = MockAnalyzer::new(vec![benign_assessment()]);
    let counter = mock.counter();
    let mut scanner = Scanner::new(Box::new(mock));

    assert!(scanner.submit("   \n\t  ").await.is_err());
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn each_submission_is_one_call() {
    let mock = MockAnalyzer::new(vec![benign_assessment(), phishing_assessment()]);
    let counter = mock.counter();
    let mut scanner = Scanner::new(Box::new(mock));

    scanner.submit("first message").await.unwrap();
    scanner.submit("second message").await.unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn analyzer_errors_propagate() {
    // An exhausted mock errors on the next call, standing in for a
    // transport failure.
    let mock = MockAnalyzer::new(vec![]);
    let mut scanner = Scanner::new(Box::new(mock));

    let err = scanner.submit("anything").await.unwrap_err();
    assert!(err.to_string().contains("no more results"));
}

/// Reports fixed token usage on every call.
struct MeteredAnalyzer;

#[async_trait]
impl Analyzer for MeteredAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<Analysis> {
        Ok(Analysis {
            assessment: benign_assessment(),
            usage: Some(TokenUsage {
                input_tokens: 800,
                output_tokens: 120,
            }),
        })
    }
}

#[tokio::test]
async fn session_usage_accumulates_across_submissions() {
    let mut scanner = Scanner::new(Box::new(MeteredAnalyzer));

    scanner.submit("one").await.unwrap();
    scanner.submit("two").await.unwrap();

    let usage = scanner.session_usage();
    assert_eq!(usage.input_tokens, 1600);
    assert_eq!(usage.output_tokens, 240);
    assert_eq!(usage.total(), 1840);
}

#[tokio::test]
async fn rejected_submission_leaves_usage_untouched() {
    let mut scanner = Scanner::new(Box::new(MeteredAnalyzer));
    let _ = scanner.submit("  ").await;
    assert_eq!(scanner.session_usage().total(), 0);
}

#[tokio::test]
async fn input_reaches_analyzer_unmodified() {
    struct EchoCheck(Arc<std::sync::Mutex<Option<String>>>);

    #[async_trait]
    impl Analyzer for EchoCheck {
        async fn analyze(&self, text: &str) -> Result<Analysis> {
            *self.0.lock().unwrap() = Some(text.to_string());
            Ok(Analysis {
                assessment: benign_assessment(),
                usage: None,
            })
        }
    }

    let seen = Arc::new(std::sync::Mutex::new(None));
    let mut scanner = Scanner::new(Box::new(EchoCheck(seen.clone())));

    // Leading/trailing whitespace is preserved on the wire
    scanner.submit("  check https://example.com  ").await.unwrap();
    assert_eq!(
        seen.lock().unwrap().as_deref(),
        Some("  check https://example.com  ")
    );
}
