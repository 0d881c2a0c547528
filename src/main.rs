use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rpal_scanner::{Config, DriverError, OutputFormat, ScanOptions, Scanner};

#[derive(Parser)]
#[command(name = "rpalscan", version, about = "RPAL lexical scanner")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, env = "RPALSCAN_VERBOSE")]
    verbose: bool,

    /// Path to the JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source file and print its tokens
    Scan {
        /// RPAL source file
        file: PathBuf,
        /// Print one JSON object per token
        #[arg(long)]
        json: bool,
        /// Leave whitespace and comment tokens out
        #[arg(long)]
        skip_deleted: bool,
        /// Report unterminated strings and unknown characters
        #[arg(long, conflicts_with = "compat")]
        strict: bool,
        /// Treat every failure, read errors included, as end of input
        #[arg(long)]
        compat: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init,
}

fn init_logging(verbose: bool) -> Result<(), DriverError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))
}

fn scan_file(path: &Path, config: &Config) -> Result<usize, DriverError> {
    if !path.is_file() {
        return Err(DriverError::FileNotFound(path.to_path_buf()));
    }

    let mut scanner = Scanner::open(path, config.scan)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut printed = 0;

    while scanner.has_more_input() {
        let token = scanner.next_token().map_err(|source| DriverError::Scan {
            path: path.to_path_buf(),
            source,
        })?;
        let Some(token) = token else {
            continue;
        };
        if config.skip_deleted && token.is_deletable() {
            continue;
        }

        match config.format {
            OutputFormat::Text => writeln!(out, "{}", token)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&token)?)?,
        }
        printed += 1;
    }

    out.flush()?;
    Ok(printed)
}

fn run(cli: Cli) -> Result<(), DriverError> {
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Scan {
            file,
            json,
            skip_deleted,
            strict,
            compat,
        } => {
            if json {
                config.format = OutputFormat::Json;
            }
            if skip_deleted {
                config.skip_deleted = true;
            }
            if strict {
                config.scan = ScanOptions::strict();
            } else if compat {
                config.scan = ScanOptions::compatible();
            }
            debug!(?config, "scanning {}", file.display());

            let printed = scan_file(&file, &config)?;
            info!("{} tokens from {}", printed, file.display());
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigCommands::Init => {
                let path = cli.config.unwrap_or_else(Config::default_path);
                if path.exists() {
                    println!("Config file already exists at: {}", path.display());
                } else {
                    Config::default().save(&path)?;
                    println!("Initialized new config file at: {}", path.display());
                }
            }
        },
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
