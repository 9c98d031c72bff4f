//! Startup banner, disclaimer, and session summary display.

use crate::analyzer::TokenUsage;
use crate::consts::format_number;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub provider: &'a str,
    pub model: &'a str,
    pub auth_status: &'a str,
    pub endpoint: &'a str,
    pub config_db: &'a str,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║           S A F E S C A N             ║
   ║   is that message safe to trust?      ║
   ╚═══════════════════════════════════════╝

   version   {}
   provider  {} ({})
   auth      {}
   endpoint  {}
   config    {}
"#,
        env!("CARGO_PKG_VERSION"),
        info.provider,
        info.model,
        info.auth_status,
        info.endpoint,
        info.config_db,
    );
    println!(
        "   note: analysis is generative-AI best effort, not a guarantee.\n\
         \x20  always verify critical requests through official channels.\n"
    );
}

/// Print the session summary (token usage + farewell).
pub fn print_session_summary(usage: TokenUsage) {
    if usage.total() > 0 {
        println!(
            "session: {:>6} input + {:>6} output = {:>6} tokens",
            format_number(usage.input_tokens),
            format_number(usage.output_tokens),
            format_number(usage.total()),
        );
    }
    println!("stay safe.");
}
