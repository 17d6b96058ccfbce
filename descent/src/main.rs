use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};

mod error;
mod parser;

use error::CheckError;
use parser::{DEFAULT_MAX_DEPTH, Verdict};

#[derive(Parser)]
#[command(name = "descent")]
#[command(about = "Recursive-descent recognizer for a small imperative language", version)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether a source file is a valid program
    Check {
        /// Source file; prompted for on stdin (without .txt) when omitted
        input: Option<String>,

        /// Nesting depth at which recognition gives up (capped at 1024)
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Print the token sequence before the verdict
        #[arg(long)]
        show_tokens: bool,
    },

    /// Print the token sequence of a source file
    Tokens {
        /// Source file
        input: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Returns whether the command succeeded; `false` means the input was rejected.
fn run(command: Commands) -> Result<bool, CheckError> {
    match command {
        Commands::Check { input, max_depth, show_tokens } => {
            let path = match input {
                Some(path) => path,
                None => prompt_for_path()?,
            };

            let source = read_source(&path)?;
            info!("checking {} ({} bytes)", path, source.len());

            if show_tokens {
                print_tokens(&parser::lexer::tokenize(&source));
            }

            let verdict = parser::check(&source, max_depth);
            print_verdict(&verdict);
            Ok(verdict.accepted)
        }
        Commands::Tokens { input } => {
            let source = read_source(&input)?;
            print_tokens(&parser::lexer::tokenize(&source));
            Ok(true)
        }
    }
}

fn prompt_for_path() -> Result<String, CheckError> {
    println!("Please enter the path to the test file (without .txt extension):");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(format!("{}.txt", line.trim_end_matches(['\r', '\n'])))
}

fn read_source(path: &str) -> Result<String, CheckError> {
    fs::read_to_string(path).map_err(|source| CheckError::ReadInput {
        path: path.to_string(),
        source,
    })
}

fn print_tokens(tokens: &[String]) {
    println!("=== TOKENS ===");
    for token in tokens {
        println!("{}", token);
    }
}

fn print_verdict(verdict: &Verdict) {
    println!("IsValid: {}", verdict.accepted);
    println!("Current Position: {}", verdict.position);
    println!("Token Count: {}", verdict.token_count);
    if verdict.depth_exceeded {
        println!("Nesting limit reached");
    }

    if verdict.accepted {
        println!("The input is in the language.");
    } else {
        println!("The input is not in the language.");
    }
}
