//! Command implementations for the lexaug CLI.

use std::sync::Arc;

use log::{debug, info};

use crate::analysis::char_filter::{CharFilter, CleanCharFilter};
use crate::analysis::stop::{BuiltinStopWords, DirectoryStopWords, StopWordProvider};
use crate::analysis::synonym::{SynonymDictionary, SynonymResolver, WordNet};
use crate::augment::{AugmentConfig, Augmenter, Operation};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::embedding::{DistanceMetric, WordVectors};
use crate::error::{LexaugError, Result};

/// Execute a CLI command.
pub fn execute_command(args: LexaugArgs) -> Result<()> {
    match &args.command {
        Command::Synonyms(synonyms_args) => list_synonyms(synonyms_args, &args),
        Command::Replace(replace_args) => {
            run_single(Operation::SynonymReplacement, replace_args, &args)
        }
        Command::Insert(insert_args) => run_single(Operation::RandomInsertion, insert_args, &args),
        Command::Delete(delete_args) => delete_words(delete_args, &args),
        Command::Swap(swap_args) => run_single(Operation::RandomSwap, swap_args, &args),
        Command::Clean(clean_args) => clean_sentence(clean_args, &args),
        Command::Augment(augment_args) => augment_sentence(augment_args, &args),
        Command::Nearest(nearest_args) => nearest_words(nearest_args, &args),
    }
}

/// List the synonyms of a word.
fn list_synonyms(args: &SynonymsArgs, cli_args: &LexaugArgs) -> Result<()> {
    let config = load_config(&args.resources)?;
    let augmenter = build_augmenter(&args.resources, config, true)?;
    let synonyms = augmenter.get_synonyms(&args.word)?;

    output_result(
        &format!("Synonyms of '{}'", args.word),
        &SynonymsResult {
            word: args.word.clone(),
            synonyms,
        },
        cli_args,
    )
}

/// Run one counted operation (replace, insert or swap).
fn run_single(operation: Operation, args: &CountedArgs, cli_args: &LexaugArgs) -> Result<()> {
    let mut config = load_config(&args.resources)?;
    if let Some(n) = args.n {
        match operation {
            Operation::SynonymReplacement => config.max_replacements = n,
            Operation::RandomInsertion => config.insertions = n,
            Operation::RandomSwap => config.swaps = n,
            Operation::RandomDeletion => {}
        }
    }

    let augmenter = build_augmenter(&args.resources, config, operation.uses_synonyms())?;
    let variant = augmenter.apply(operation, &args.sentence)?;

    output_augmented(&args.sentence, vec![operation], vec![variant], cli_args)
}

/// Randomly delete words.
fn delete_words(args: &DeleteArgs, cli_args: &LexaugArgs) -> Result<()> {
    let mut config = load_config(&args.resources)?;
    if let Some(p) = args.p {
        config.deletion_probability = p;
    }

    let augmenter = build_augmenter(&args.resources, config, false)?;
    let variant = augmenter.apply(Operation::RandomDeletion, &args.sentence)?;

    output_augmented(
        &args.sentence,
        vec![Operation::RandomDeletion],
        vec![variant],
        cli_args,
    )
}

/// Strip punctuation and lowercase a sentence.
fn clean_sentence(args: &CleanArgs, cli_args: &LexaugArgs) -> Result<()> {
    let cleaned = CleanCharFilter::new()?.filter(&args.sentence);
    output_augmented(&args.sentence, vec![], vec![cleaned], cli_args)
}

/// Generate several augmented variants.
fn augment_sentence(args: &AugmentArgs, cli_args: &LexaugArgs) -> Result<()> {
    let mut config = load_config(&args.resources)?;
    if !args.ops.is_empty() {
        config.operations = args
            .ops
            .iter()
            .map(|op| Operation::parse_str(op))
            .collect::<Result<Vec<_>>>()?;
    }
    let operations = config.operations.clone();
    let needs_synonyms = operations.iter().any(Operation::uses_synonyms);

    let augmenter = build_augmenter(&args.resources, config, needs_synonyms)?;
    let sentence = if args.clean {
        augmenter.clean(&args.sentence)
    } else {
        args.sentence.clone()
    };

    let variants = if args.chain {
        (0..args.count)
            .map(|_| augmenter.apply_chain(&operations, &sentence))
            .collect::<Result<Vec<_>>>()?
    } else {
        augmenter.generate(&sentence, args.count)?
    };
    info!("Generated {} variants", variants.len());

    output_augmented(&args.sentence, operations, variants, cli_args)
}

/// Find the nearest words in an embedding table.
fn nearest_words(args: &NearestArgs, cli_args: &LexaugArgs) -> Result<()> {
    let metric = match args.metric {
        MetricArg::Euclidean => DistanceMetric::Euclidean,
        MetricArg::Cosine => DistanceMetric::Cosine,
        MetricArg::Manhattan => DistanceMetric::Manhattan,
    };

    let vectors = WordVectors::from_file(&args.vectors)?.with_metric(metric);
    let neighbors = vectors.nearest(&args.word, args.k)?;

    output_result(
        &format!("Nearest words to '{}' ({})", args.word, metric.name()),
        &NearestResult {
            word: args.word.clone(),
            metric,
            neighbors,
        },
        cli_args,
    )
}

fn output_augmented(
    original: &str,
    operations: Vec<Operation>,
    variants: Vec<String>,
    cli_args: &LexaugArgs,
) -> Result<()> {
    let operations: Vec<String> = operations.iter().map(|op| op.to_string()).collect();
    let message = if operations.is_empty() {
        format!("Cleaned '{original}'")
    } else {
        format!("Augmented '{original}' with {}", operations.join(", "))
    };

    output_result(
        &message,
        &AugmentResult {
            original: original.to_string(),
            operations,
            variants,
        },
        cli_args,
    )
}

/// Load the augmentation config and apply command line overrides.
pub fn load_config(resources: &ResourceArgs) -> Result<AugmentConfig> {
    let mut config = match &resources.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            AugmentConfig::from_file(path)?
        }
        None => AugmentConfig::default(),
    };

    if let Some(language) = &resources.language {
        config.language = language.clone();
    }
    if let Some(seed) = resources.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

/// Open the synonym source named on the command line.
///
/// With `required` unset and no source given, an empty dictionary is used.
pub fn build_resolver(
    resources: &ResourceArgs,
    required: bool,
) -> Result<Arc<dyn SynonymResolver>> {
    let resolver: Arc<dyn SynonymResolver> = match (&resources.synonyms, &resources.wordnet) {
        (Some(path), _) => Arc::new(SynonymDictionary::load_from_file(path)?),
        (None, Some(dir)) => Arc::new(WordNet::load_dir(dir)?),
        (None, None) if required => {
            return Err(LexaugError::invalid_argument(
                "a synonym source is required: pass --synonyms <FILE> or --wordnet <DIR>",
            ));
        }
        (None, None) => {
            debug!("No synonym source given, synonym lookups will be empty");
            Arc::new(SynonymDictionary::new())
        }
    };

    debug!("Using synonym resolver '{}'", resolver.name());
    Ok(resolver)
}

fn build_augmenter(
    resources: &ResourceArgs,
    config: AugmentConfig,
    needs_synonyms: bool,
) -> Result<Augmenter> {
    let resolver = build_resolver(resources, needs_synonyms)?;
    let provider: Box<dyn StopWordProvider> = match &resources.stop_words {
        Some(root) => Box::new(DirectoryStopWords::new(root)),
        None => Box::new(BuiltinStopWords),
    };
    Augmenter::with_config(provider.as_ref(), resolver, config)
}
