//! magiclog - CLI

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use magiclog::languages::{builtin, ALIASES, LANGUAGES};
use magiclog::util::config::{get_config_path, load_user_settings, Settings};
use magiclog::util::logger::{self, LogLevel};
use magiclog::{tokenize, Direction, LineRequest, LogEdit, MagicLog, NAME, VERSION};

/// Turn a line of source code into a debug log statement
#[derive(Parser, Debug)]
#[command(name = "magiclog")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Language id or alias (defaults to the configured default language)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Settings file (defaults to ~/.config/magiclog/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the caret offset after each statement
    #[arg(long, global = true)]
    caret: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a log statement for a line
    Create {
        #[arg(value_name = "LINE")]
        line: String,

        /// Line number used when the line cannot be tokenized
        #[arg(short = 'n', long, default_value_t = 1)]
        line_number: usize,
    },

    /// Rotate an existing log statement to the next format
    Rotate {
        #[arg(value_name = "LINE")]
        line: String,

        /// Rotate to the previous format instead
        #[arg(short, long)]
        backward: bool,
    },

    /// Rotate if the line is a log statement, otherwise create one.
    /// Reads lines from stdin when no line is given.
    Magic {
        #[arg(value_name = "LINE")]
        line: Option<String>,
    },

    /// Exit with success if the line is a log statement
    Check {
        #[arg(value_name = "LINE")]
        line: String,
    },

    /// Print the tokens of a line
    Tokens {
        #[arg(value_name = "LINE")]
        line: String,
    },

    /// List built-in languages and aliases
    Languages,
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Settings::load(path).with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => load_user_settings().with_context(|| {
            let path = get_config_path().map(|p| p.display().to_string()).unwrap_or_default();
            format!("Failed to load config: {path}")
        }),
    }
}

fn print_edit(
    edit: &LogEdit,
    caret: bool,
) {
    if caret {
        println!("{}\t{}", edit.text(), edit.caret());
    } else {
        println!("{}", edit.text());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    logger::init_with_level(if args.verbose { LogLevel::Debug } else { LogLevel::Warn });

    let settings = load_settings(args.config.as_ref())?;
    let language = args
        .language
        .clone()
        .unwrap_or_else(|| settings.default_language.clone());
    let mut magic = MagicLog::new(settings);

    match args.command {
        Commands::Create { line, line_number } => {
            print_edit(&magic.create(&line, &language, line_number), args.caret);
        }
        Commands::Rotate { line, backward } => {
            let direction = if backward { Direction::Backward } else { Direction::Forward };
            let Some(edit) = magic.rotate(&line, &language, direction) else {
                bail!("Not a log statement for {}: {}", magic.resolve(&language), line.trim());
            };
            print_edit(&edit, args.caret);
        }
        Commands::Magic { line: Some(line) } => {
            print_edit(&magic.create_or_rotate(&line, &language, 1), args.caret);
        }
        Commands::Magic { line: None } => {
            let requests = io::stdin()
                .lock()
                .lines()
                .enumerate()
                .map(|(index, line)| Ok(LineRequest::new(line?, language.as_str(), index + 1)))
                .collect::<io::Result<Vec<_>>>()
                .context("Failed to read stdin")?;
            for edit in magic.process_batch(&requests) {
                print_edit(&edit, args.caret);
            }
        }
        Commands::Check { line } => {
            if !magic.is_log_statement(&line, &language) {
                std::process::exit(1);
            }
        }
        Commands::Tokens { line } => {
            let compiled = magic.compiled(&language);
            let tokens = tokenize(&line, &compiled.profile.grammar)
                .with_context(|| format!("Failed to tokenize as {}", compiled.profile.id))?;
            for token in tokens {
                println!("{:<12} {:?}", token.kind.to_string(), token.value);
            }
        }
        Commands::Languages => {
            for id in LANGUAGES {
                let aliases: Vec<&str> = ALIASES
                    .iter()
                    .filter(|(_, target)| target == id)
                    .map(|(alias, _)| *alias)
                    .collect();
                let formats = builtin(id).map(|profile| profile.logger_config.len()).unwrap_or(0);
                println!("{id:<12} formats: {formats}  aliases: {}", aliases.join(", "));
            }
        }
    }

    Ok(())
}
