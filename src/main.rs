use listscan::{analyze_with, check_target, FetchConfig, Report, DEFAULT_USER_AGENT, USAGE};

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "listscan",
    version,
    about = "Report the item count of the largest unordered list on a web page"
)]
struct Cli {
    /// Page to analyze (must start with http)
    url: Option<String>,
    /// Abort the request after this many seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
    /// User-Agent header sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Follow HTTP redirects instead of treating them as errors
    #[arg(long)]
    follow_redirects: bool,
    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,
    /// Log filter written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = "error")]
    log_level: String,
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
            follow_redirects: self.follow_redirects,
        }
    }
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&cli.log_level) {
        eprintln!("Error: invalid --log-level {:?}: {e}", cli.log_level);
        return ExitCode::FAILURE;
    }

    let Some(url) = check_target(cli.url.as_deref()) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match analyze_with(url, &cli.fetch_config()).await {
        Ok(count) => {
            let report = Report::new(url, count);
            if cli.json {
                match report.to_json() {
                    Ok(line) => println!("{line}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", report.sentence());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", anyhow::Error::new(e));
            ExitCode::FAILURE
        }
    }
}
