//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexaugArgs, OutputFormat};
use crate::embedding::{DistanceMetric, Neighbor};
use crate::error::Result;

/// Result structure for synonym lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynonymsResult {
    pub word: String,
    pub synonyms: Vec<String>,
}

/// Result structure for augmentation commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct AugmentResult {
    pub original: String,
    pub operations: Vec<String>,
    pub variants: Vec<String>,
}

/// Result structure for nearest-word lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct NearestResult {
    pub word: String,
    pub metric: DistanceMetric,
    pub neighbors: Vec<Neighbor>,
}

/// Anything the CLI can print in human-readable form.
pub trait HumanOutput {
    fn render_human(&self) -> Vec<String>;
}

impl HumanOutput for SynonymsResult {
    fn render_human(&self) -> Vec<String> {
        if self.synonyms.is_empty() {
            return vec![format!("No synonyms for '{}'", self.word)];
        }
        self.synonyms.clone()
    }
}

impl HumanOutput for AugmentResult {
    fn render_human(&self) -> Vec<String> {
        self.variants.clone()
    }
}

impl HumanOutput for NearestResult {
    fn render_human(&self) -> Vec<String> {
        let width = self
            .neighbors
            .iter()
            .map(|n| n.word.chars().count())
            .max()
            .unwrap_or(0);
        self.neighbors
            .iter()
            .enumerate()
            .map(|(i, n)| format!("{:>3}. {:<width$}  {:.4}", i + 1, n.word, n.distance))
            .collect()
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &LexaugArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &LexaugArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!("{}", "─".repeat(message.chars().count()));
    }

    for line in result.render_human() {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexaugArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
