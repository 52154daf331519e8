use clap::{Parser, ValueEnum};
use std::{io::Read, path::PathBuf};
use tilde_tokenizer::{config::TokenizerConfig, report::Report, Error, InternalResult};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to tokenize. Read from --file or stdin when omitted
    text: Option<String>,

    /// Read the text to tokenize from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, default_value = "tilde.json")]
    config: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn run(cli: &Cli) -> InternalResult<String> {
    let config = if cli.config.exists() {
        TokenizerConfig::from_file(&cli.config)?
    } else {
        TokenizerConfig::default()
    };

    info!("config loaded.");
    debug!("config: {:?}", config);

    let input = read_input(cli)?;
    debug!(bytes = input.len(), "input read");

    let report = Report::from_input(&input, &config);

    match cli.format {
        Format::Text => Ok(report.render(&config.report)),
        Format::Json => report.to_json().map(|json| json + "\n"),
    }
}

fn read_input(cli: &Cli) -> InternalResult<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }

    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path).map_err(|source| Error::Input {
            path: path.clone(),
            source,
        });
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
