//! Terminal rendering of an [`Assessment`]. Pure presentation: build the
//! whole report as a string, let the caller print it.

use crate::assessment::{Assessment, Metric};

const RULE_WIDTH: usize = 60;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Score tiers, matching the gauge thresholds: higher is safer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Safe,
    Caution,
    Danger,
}

impl Tier {
    /// Tier for a 0-100 score.
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            Tier::Safe
        } else if score >= 50.0 {
            Tier::Caution
        } else {
            Tier::Danger
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Safe => "SAFE",
            Tier::Caution => "CAUTION",
            Tier::Danger => "HIGH RISK",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Tier::Safe => GREEN,
            Tier::Caution => YELLOW,
            Tier::Danger => RED,
        }
    }
}

/// Render the full report. Each submission re-renders everything; nothing
/// is kept between submissions.
pub fn render(assessment: &Assessment) -> String {
    let mut out = String::new();
    let rule = "─".repeat(RULE_WIDTH);

    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&headline(&assessment.risk_label, &assessment.risk_score));
    out.push_str(&format!("{rule}\n"));

    out.push_str(&format!("{}\n", assessment.summary.trim()));

    out.push_str(&format!("\n{BOLD}Red Flags{RESET}\n"));
    if assessment.red_flags.is_empty() {
        out.push_str("no specific red flags detected.\n");
    } else {
        for flag in &assessment.red_flags {
            out.push_str(&format!("• {flag}\n"));
        }
    }

    if !assessment.evidence.is_empty() {
        out.push_str(&format!("\n{BOLD}Evidence{RESET}\n"));
        for quote in &assessment.evidence {
            out.push_str(&format!("> {quote}\n"));
        }
    }

    out.push_str(&format!("\n{BOLD}Recommended Actions{RESET}\n"));
    for action in &assessment.recommended_action {
        out.push_str(&format!("• {action}\n"));
    }

    out.push_str(&format!("\nconfidence: {}\n{rule}\n", assessment.confidence));
    out
}

/// Headline metric: label + score, tier-colored when the score is numeric.
fn headline(label: &str, score: &Metric) -> String {
    match score.as_f64() {
        Some(n) => {
            let tier = Tier::of(n);
            format!(
                "{BOLD}{label}{RESET}  {score}/100  {}{}{RESET}\n",
                tier.color(),
                tier.label(),
            )
        }
        None => format!("{BOLD}{label}{RESET}  {score}\n"),
    }
}
