//! `receipt-total [--json] [FILE.eml | -]`
//!
//! Without a file the message is fetched over IMAP using `local.env` and the
//! process environment.

use receipt_total::{
    ENV_FILE, FetchError, ImapConfig, MatchConfig, Receipt, fetch_receipt, load_env_file,
    parse_receipt_with,
};
use clap::Parser;
use std::io::Read;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Extract the receipt total from an email
#[derive(Parser, Debug)]
#[command(name = "receipt-total", version)]
struct Args {
    /// Print the whole receipt as JSON
    #[arg(long)]
    json: bool,

    /// Raw message to read instead of fetching over IMAP (`-` for stdin)
    input: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    match run(&args).await {
        Ok(receipt) => {
            if args.json {
                match serde_json::to_string_pretty(&receipt) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        error!(error = %e, "Failed to serialize receipt");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{receipt}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to extract total");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<Receipt, FetchError> {
    load_env_file(ENV_FILE);

    match args.input.as_deref() {
        Some(path) => {
            let extractor = MatchConfig::from_env().extractor()?;
            let raw = read_input(path)?;
            Ok(parse_receipt_with(0, &raw, &extractor)?)
        }
        None => {
            let config = ImapConfig::from_env()?;
            fetch_receipt(&config).await
        }
    }
}

fn read_input(path: &str) -> Result<Vec<u8>, FetchError> {
    if path == "-" {
        let mut raw = Vec::new();
        std::io::stdin().read_to_end(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["receipt-total"]).unwrap();
        assert!(!args.json);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_args_json_and_file() {
        let args = Args::try_parse_from(["receipt-total", "--json", "receipt.eml"]).unwrap();
        assert!(args.json);
        assert_eq!(args.input.as_deref(), Some("receipt.eml"));
    }

    #[test]
    fn test_args_stdin() {
        let args = Args::try_parse_from(["receipt-total", "-"]).unwrap();
        assert_eq!(args.input.as_deref(), Some("-"));
    }

    #[test]
    fn test_args_help_is_not_a_path() {
        let err = Args::try_parse_from(["receipt-total", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_args_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["receipt-total", "--verbose"]).is_err());
    }

    #[test]
    fn test_args_second_file_rejected() {
        assert!(Args::try_parse_from(["receipt-total", "a.eml", "b.eml"]).is_err());
    }
}
