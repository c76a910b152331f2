// SPDX-License-Identifier: PMPL-1.0-or-later

//! ngram-langid: character n-gram language identification
//!
//! Trains ranked n-gram profiles for English, German, Slovene, Spanish and
//! Croatian, and classifies text by out-of-place rank distance.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use ngram_langid::config::Config;
use ngram_langid::evaluate::{self, EvaluationConfig};
use ngram_langid::report::{self, ReportOutputFormat};
use ngram_langid::{corpus, storage, train, Language, LangIdError, LanguageProfileSet};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ngram-langid")]
#[command(version)]
#[command(about = "Character n-gram language identification")]
#[command(long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding <code>_corpus.txt training corpora
    #[arg(long, global = true)]
    train_dir: Option<PathBuf>,

    /// Directory holding <code>_profile.txt language profiles
    #[arg(long, global = true)]
    profile_dir: Option<PathBuf>,

    /// Verbose output (per-language distances, profile sizes)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build profiles from every training corpus and save them
    Train,

    /// Classify a single text file against the saved profiles
    Classify {
        /// Text file to classify, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Classify the numbered test chunks of one language and report accuracy
    Evaluate {
        /// Language code of the test chunks (en, de, si, es, hr)
        #[arg(value_name = "LANG")]
        language: String,

        /// Retrain and save profiles before evaluating
        #[arg(long)]
        train: bool,

        /// Directory holding <code>/<i>.txt test chunks
        #[arg(long)]
        test_dir: Option<PathBuf>,

        /// Number of chunks to evaluate
        #[arg(short = 'n', long)]
        test_files: Option<usize>,

        /// Write the report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format (default: from the output extension, else JSON)
        #[arg(long, value_enum)]
        format: Option<ReportOutputFormat>,
    },

    /// Split a corpus into numbered test chunks
    Split {
        /// Corpus file to split
        #[arg(value_name = "CORPUS")]
        corpus: PathBuf,

        /// Directory receiving 0.txt, 1.txt, ...
        #[arg(value_name = "OUT_DIR")]
        out_dir: PathBuf,

        /// Lines per chunk
        #[arg(short, long)]
        lines: Option<usize>,
    },

    /// List supported languages
    Languages,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.train_dir {
        config.train_dir = dir;
    }
    if let Some(dir) = cli.profile_dir {
        config.profile_dir = dir;
    }

    match cli.command {
        Commands::Train => {
            let stored = train_and_save(&config)?;
            println!("Saved {} language profiles:", stored.len());
            for path in &stored {
                println!("  {}", path.display());
            }
        }

        Commands::Classify { input } => {
            let text = read_input(&input)?;
            let profiles = load_profiles(&config)?;
            match ngram_langid::classify(&text, &profiles) {
                Some(classification) => report::print_classification(&classification),
                None => println!("No language profiles loaded"),
            }
        }

        Commands::Evaluate {
            language,
            train,
            test_dir,
            test_files,
            output,
            format,
        } => {
            let language = match Language::from_code(&language) {
                Ok(language) => language,
                Err(LangIdError::UnsupportedLanguageSelector(code)) => {
                    println!("\n{} language not supported: {}", "ERROR:".red().bold(), code);
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            if train {
                train_and_save(&config)?;
            }
            let profiles = load_profiles(&config)?;

            let eval_config = EvaluationConfig {
                language,
                test_dir: test_dir.unwrap_or(config.test_dir),
                test_files: test_files.unwrap_or(config.test_files),
            };
            let evaluation = evaluate::run(&eval_config, &profiles)?;
            report::print_evaluation(&evaluation);

            if let Some(output_path) = output {
                let format = format.unwrap_or_else(|| ReportOutputFormat::from_path(&output_path));
                report::save_report(&evaluation, format, format.output_path(&output_path))?;
            }
        }

        Commands::Split {
            corpus: corpus_path,
            out_dir,
            lines,
        } => {
            let written = corpus::split_corpus(
                &corpus_path,
                &out_dir,
                lines.unwrap_or(config.chunk_lines),
            )?;
            println!(
                "corpus split into {} files under {}",
                written.len(),
                out_dir.display()
            );
        }

        Commands::Languages => {
            println!("  {:<6} {:<10} {:<16} {}", "Code", "Name", "Corpus", "Profile");
            println!("  {}", "-".repeat(52));
            for lang in Language::ALL {
                let desc = lang.descriptor();
                println!(
                    "  {:<6} {:<10} {:<16} {}",
                    desc.code, desc.name, desc.corpus_file, desc.profile_file
                );
            }
        }
    }

    Ok(())
}

fn train_and_save(config: &Config) -> Result<Vec<PathBuf>> {
    let profiles = train::train_all(&config.train_dir, &Language::ALL)?;
    let stored = storage::save_profile_set(&profiles, &config.profile_dir)?;
    Ok(stored)
}

fn load_profiles(config: &Config) -> Result<LanguageProfileSet> {
    storage::load_profile_set(&config.profile_dir, &Language::ALL).with_context(|| {
        format!(
            "loading language profiles from {} (run `ngram-langid train` first?)",
            config.profile_dir.display()
        )
    })
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading text from stdin")?;
        Ok(text)
    } else {
        Ok(storage::read_corpus(input)?)
    }
}
