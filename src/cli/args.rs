//! Command line argument parsing for the lexaug CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// lexaug - Easy Data Augmentation and word-vector neighbors
#[derive(Parser, Debug, Clone)]
#[command(name = "lexaug")]
#[command(about = "Easy Data Augmentation for sentences and nearest-word lookup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexaugArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexaugArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the synonyms of a word
    Synonyms(SynonymsArgs),

    /// Replace words with synonyms
    Replace(CountedArgs),

    /// Insert synonyms of random words
    Insert(CountedArgs),

    /// Delete words at random
    Delete(DeleteArgs),

    /// Swap random pairs of words
    Swap(CountedArgs),

    /// Strip punctuation and lowercase a sentence
    Clean(CleanArgs),

    /// Generate several augmented variants
    Augment(AugmentArgs),

    /// Find the nearest words in an embedding table
    Nearest(NearestArgs),
}

/// Where lexical resources come from and how the augmenter is seeded.
#[derive(Args, Debug, Clone, Default)]
pub struct ResourceArgs {
    /// Synonym dictionary (JSON array of sense groups)
    #[arg(long, value_name = "FILE", conflicts_with = "wordnet")]
    pub synonyms: Option<PathBuf>,

    /// WordNet `dict` directory containing data.noun, data.verb, ...
    #[arg(long, value_name = "DIR")]
    pub wordnet: Option<PathBuf>,

    /// Directory of stop-word files, one file per language
    #[arg(long, value_name = "DIR")]
    pub stop_words: Option<PathBuf>,

    /// Stop-word language
    #[arg(long)]
    pub language: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Augmentation config file (JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for listing synonyms
#[derive(Parser, Debug, Clone)]
pub struct SynonymsArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

/// Arguments for operations that repeat a number of times
#[derive(Parser, Debug, Clone)]
pub struct CountedArgs {
    /// Sentence to augment
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Number of words to change (defaults to the config value)
    #[arg(short, long)]
    pub n: Option<usize>,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

/// Arguments for random deletion
#[derive(Parser, Debug, Clone)]
pub struct DeleteArgs {
    /// Sentence to augment
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Probability of deleting each word (defaults to the config value)
    #[arg(short, long)]
    pub p: Option<f64>,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

/// Arguments for cleaning
#[derive(Parser, Debug, Clone)]
pub struct CleanArgs {
    /// Sentence to clean
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,
}

/// Arguments for generating variants
#[derive(Parser, Debug, Clone)]
pub struct AugmentArgs {
    /// Sentence to augment
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Number of variants to generate
    #[arg(short, long, default_value = "4")]
    pub count: usize,

    /// Operations to cycle through (sr, ri, rd, rs; comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ops: Vec<String>,

    /// Apply the operations in sequence to produce each variant
    #[arg(long)]
    pub chain: bool,

    /// Clean the sentence before augmenting it
    #[arg(long)]
    pub clean: bool,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

/// Arguments for nearest-word lookup
#[derive(Parser, Debug, Clone)]
pub struct NearestArgs {
    /// Query word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Embedding table (`word v1 v2 ... vD` per line)
    #[arg(long, value_name = "FILE")]
    pub vectors: PathBuf,

    /// Number of words to return
    #[arg(short, long, default_value = "5")]
    pub k: usize,

    /// Distance metric
    #[arg(short, long, default_value = "euclidean")]
    pub metric: MetricArg,
}

/// Distance metrics selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricArg {
    /// Euclidean (L2) distance
    Euclidean,
    /// Cosine distance
    Cosine,
    /// Manhattan (L1) distance
    Manhattan,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
