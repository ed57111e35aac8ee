// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use test_matrices::config::{MATRIX_SIZE, RESULT_FILE};
use test_matrices::{GeneratorConfig, generate_corpus, verify_corpus};

#[derive(Parser, Debug)]
#[command(
    name = "test_matrices",
    version,
    about = "Generates GF(2) matrix rank test vectors"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a corpus of matrices with their ranks (the default)
    Generate(GenerateArgs),
    /// Recompute every rank in an existing corpus
    Verify(VerifyArgs),
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// JSON configuration file; omitted fields keep their defaults
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Output file, overriding the configuration
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Random seed, overriding the configuration
    #[arg(long = "seed")]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Corpus file to check
    #[arg(default_value = RESULT_FILE)]
    path: PathBuf,

    /// Row and column count of every matrix in the corpus
    #[arg(long = "dimension", default_value_t = MATRIX_SIZE)]
    dimension: usize,
}

fn main() -> miette::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        None => generate(GenerateArgs::default()),
        Some(Command::Generate(args)) => generate(args),
        Some(Command::Verify(args)) => verify(&args),
    }
}

fn generate(args: GenerateArgs) -> miette::Result<()> {
    let mut config = match args.config {
        Some(path) => GeneratorConfig::load(&path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(output) = args.output {
        config.output = output;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    generate_corpus(&config)?;
    Ok(())
}

fn verify(args: &VerifyArgs) -> miette::Result<()> {
    verify_corpus(&args.path, args.dimension)?;
    Ok(())
}
