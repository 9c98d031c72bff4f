use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

use safescan::analyzer::Analyzer;
use safescan::analyzer::gemini::GeminiAnalyzer;
use safescan::analyzer::remote::RemoteAnalyzer;
use safescan::assessment::Assessment;
use safescan::banner::{BannerInfo, print_banner, print_session_summary};
use safescan::config::Config;
use safescan::consts::{
    GEMINI_KEY_ENV, KEY_GEMINI_API_KEY, KEY_MODEL, KEY_REMOTE_URL, REMOTE_URL_ENV,
    default_db_path,
};
use safescan::report;
use safescan::scanner::Scanner;
use safescan::spinner::Spinner;

#[derive(Debug, Clone, ValueEnum)]
enum Provider {
    /// Call the Gemini API directly
    Gemini,
    /// Call a separately hosted analysis service
    Remote,
}

#[derive(Parser)]
#[command(name = "safescan", version, about = "Is that message safe to trust?")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Analysis backend
    #[arg(short, long, value_enum, default_value_t = Provider::Gemini)]
    provider: Provider,

    /// Gemini model name (ignored for the remote provider)
    #[arg(long)]
    model: Option<String>,

    /// Remote analysis service URL (remote provider only)
    #[arg(long)]
    url: Option<String>,

    /// Config database path (defaults to ~/.safescan/safescan.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Analyze a single message and exit; use "-" to read it from stdin
    #[arg(short, long)]
    run: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect or change stored configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Store a value (e.g. gemini_api_key, remote_url, model)
    Set { key: String, value: String },
    /// Print a stored value
    Get { key: String },
    /// Delete a stored value
    Unset { key: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => default_db_path(),
    };
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_label = db_path.display().to_string();
    let config = Config::open(&db_label)?;

    if let Some(Command::Config { action }) = &cli.command {
        return handle_config(&config, action);
    }

    // Wire up the analyzer based on provider
    let (analyzer, provider_name, model_name, auth_status, endpoint): (
        Box<dyn Analyzer>,
        &str,
        String,
        String,
        String,
    ) = match cli.provider {
        Provider::Gemini => {
            if cli.url.is_some() {
                eprintln!("warning: --url is ignored for the gemini provider");
            }
            let api_key = config
                .resolve(KEY_GEMINI_API_KEY, GEMINI_KEY_ENV)?
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "no Gemini API key found. Set {} or run \
                         `safescan config set {} <key>`.",
                        GEMINI_KEY_ENV,
                        KEY_GEMINI_API_KEY
                    )
                })?;
            let model = match &cli.model {
                Some(model) => Some(model.clone()),
                None => config.get(KEY_MODEL)?,
            };
            let analyzer = GeminiAnalyzer::new(model, api_key);
            let model_name = analyzer.model().to_string();
            (
                Box::new(analyzer),
                "gemini",
                model_name,
                "API key ✓".to_string(),
                "generativelanguage.googleapis.com".to_string(),
            )
        }
        Provider::Remote => {
            if cli.model.is_some() {
                eprintln!("warning: --model is ignored for the remote provider");
            }
            let url = match &cli.url {
                Some(url) => url.clone(),
                None => config
                    .resolve(KEY_REMOTE_URL, REMOTE_URL_ENV)?
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "no analysis service URL found. Pass --url, set {}, or run \
                             `safescan config set {} <url>`.",
                            REMOTE_URL_ENV,
                            KEY_REMOTE_URL
                        )
                    })?,
            };
            let endpoint = url.clone();
            (
                Box::new(RemoteAnalyzer::new(url)),
                "remote",
                "—".to_string(),
                "N/A".to_string(),
                endpoint,
            )
        }
    };

    let mut scanner = Scanner::new(analyzer);

    // Single message mode: render the verdict or fail loud with the
    // transport/parse error.
    if let Some(text) = cli.run {
        let text = if text == "-" { read_stdin().await? } else { text };
        let assessment = analyze_with_spinner(&mut scanner, &text).await?;
        println!("{}", report::render(&assessment));
        print_session_summary(scanner.session_usage());
        return Ok(());
    }

    print_banner(&BannerInfo {
        provider: provider_name,
        model: &model_name,
        auth_status: &auth_status,
        endpoint: &endpoint,
        config_db: &db_label,
    });

    // REPL — async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nsafescan> ");
        io::stdout().flush()?;

        // Read next line, interruptible by Ctrl+C
        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let text = line.trim();

        if text == "quit" || text == "exit" {
            break;
        }
        if text.is_empty() {
            eprintln!("please paste a message to analyze (or 'quit' to leave).");
            continue;
        }

        // Ctrl+C during analysis abandons the call, not the REPL
        let spinner = Spinner::start("analyzing");
        let outcome = tokio::select! {
            result = scanner.submit(&line) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };
        spinner.stop().await;

        match outcome {
            Some(Ok(assessment)) => println!("{}", report::render(&assessment)),
            Some(Err(e)) => eprintln!("error: {:#}", e),
            None => println!("\ninterrupted"),
        }
    }

    print_session_summary(scanner.session_usage());
    Ok(())
}

async fn analyze_with_spinner(scanner: &mut Scanner, text: &str) -> anyhow::Result<Assessment> {
    let spinner = Spinner::start("analyzing");
    let result = scanner.submit(text).await;
    spinner.stop().await;
    result
}

async fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}

fn handle_config(config: &Config, action: &ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Set { key, value } => {
            config.set(key, value)?;
            println!("✓ {} saved", key);
        }
        ConfigAction::Get { key } => match config.get(key)? {
            Some(value) => println!("{}", value),
            None => println!("{} is not set", key),
        },
        ConfigAction::Unset { key } => {
            config.remove(key)?;
            println!("✓ {} removed", key);
        }
    }
    Ok(())
}
