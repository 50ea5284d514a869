use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use pwd_analyzer::{analyze_password, write_report};
use secrecy::SecretString;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwd-analyzer")]
#[command(about = "Rate a password and suggest improvements")]
#[command(version)]
struct Cli {
    /// Log filter for diagnostics written to stderr
    #[arg(long, env = "PWD_ANALYZER_LOG", default_value = "warn")]
    log: String,

    /// Read the password without printing a prompt
    #[arg(long)]
    no_prompt: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("no password supplied on standard input")]
    EndOfInput,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.no_prompt {
        write!(out, "Enter your password: ")?;
        out.flush()?;
    }

    let password = read_password(&mut stdin.lock())?;
    debug!("password read, starting analysis");

    let result = analyze_password(&password);
    write_report(&mut out, &result)?;
    out.flush()?;

    Ok(())
}

/// Reads one line and wraps it as a secret, without the line terminator.
fn read_password<R: BufRead>(input: &mut R) -> Result<SecretString, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::EndOfInput);
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(SecretString::new(line.into()))
}
