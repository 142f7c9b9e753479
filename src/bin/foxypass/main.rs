use std::path::PathBuf;
use std::process;

use clap::Parser;

mod clipboard;
mod config;
mod generate;
mod interactive;
mod score;
mod table;

/// Generate strong passwords, and score the strength of passwords.
#[derive(Parser)]
#[command(version)]
enum Args {
    /// Generate one or more passwords.
    ///
    /// Each password contains at least one character from every included class. Defaults come
    /// from the config file ($FOXYPASS_CONFIG, or ~/.config/foxypass/config.yaml), and are
    /// overridden by the options given here.
    #[command(alias = "gen")]
    Generate {
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        options: generate::GenerateOptions,
    },
    /// Score the strength of a password. Prompts for it if it isn't given.
    Score {
        password: Option<String>,
        /// Print the strength report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Choose the length and character classes at a prompt, then generate passwords.
    Interactive {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args {
        Args::Generate { config, options } => generate::generate(config, options)?,
        Args::Score { password, json } => score::score(password, json)?,
        Args::Interactive { config } => interactive::interactive(config)?,
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("No character classes were selected; at least one is required.")]
    NoClassesSelected,
    #[error("Asked to generate zero passwords.")]
    ZeroCount,
    #[error("Could not generate a password: {0}")]
    Generation(foxypass::GenerationError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<foxypass::GenerationError> for ProgError {
    fn from(err: foxypass::GenerationError) -> ProgError {
        ProgError::Generation(err)
    }
}
