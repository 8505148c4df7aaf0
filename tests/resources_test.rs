use std::fs;
use std::sync::Arc;

use lexaug::analysis::stop::{BuiltinStopWords, DirectoryStopWords, StopWordProvider};
use lexaug::analysis::synonym::{SynonymDictionary, SynonymResolver, WordNet};
use lexaug::augment::{AugmentConfig, Augmenter};
use lexaug::error::LexaugError;
use tempfile::TempDir;

const DATA_ADJ: &str = "  1 This software and database is being provided to you, the LICENSEE, by
01155354 00 s 03 fast 0 quick 0 speedy 0 000 | acting or moving quickly
00389310 00 s 02 brown 0 brownish 0 000 | of a color similar to that of wood or earth
";

const DATA_NOUN: &str = "\
02120997 05 n 02 fox 0 Vulpes_vulpes 0 000 | alert carnivorous mammal
";

const DATA_VERB: &str = "\
01963942 38 v 02 jump 0 leap 0 000 | move forward by leaps and bounds
02095311 38 v 02 run 0 sprint 0 000 | move fast by using one's feet
";

const VERB_EXC: &str = "ran run\n";

#[test]
fn test_wordnet_backed_augmenter() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("data.adj"), DATA_ADJ)?;
    fs::write(temp_dir.path().join("data.noun"), DATA_NOUN)?;

    let wordnet = WordNet::load_dir(temp_dir.path())?;
    assert_eq!(wordnet.sense_count(), 3);

    let augmenter = Augmenter::with_config(
        &BuiltinStopWords,
        Arc::new(wordnet),
        AugmentConfig::default().with_seed(1),
    )?;

    assert_eq!(augmenter.get_synonyms("quick")?, vec!["fast", "speedy"]);
    assert_eq!(augmenter.get_synonyms("fox")?, vec!["vulpes vulpes"]);

    let replaced = augmenter.synonym_replacement("the quick fox", 1)?;
    assert!(replaced.starts_with("the "));
    assert_ne!(replaced, "the quick fox");

    Ok(())
}

#[test]
fn test_wordnet_inflected_words() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("data.adj"), DATA_ADJ)?;
    fs::write(temp_dir.path().join("data.noun"), DATA_NOUN)?;
    fs::write(temp_dir.path().join("data.verb"), DATA_VERB)?;
    fs::write(temp_dir.path().join("verb.exc"), VERB_EXC)?;

    let wordnet = WordNet::load_dir(temp_dir.path())?;
    assert_eq!(wordnet.sense_count(), 5);
    assert_eq!(wordnet.lookup("jumps")?, vec!["jump", "leap"]);

    let augmenter = Augmenter::with_config(
        &BuiltinStopWords,
        Arc::new(wordnet),
        AugmentConfig::default().with_seed(3),
    )?;

    assert_eq!(augmenter.get_synonyms("jumps")?, vec!["jump", "leap"]);
    assert_eq!(augmenter.get_synonyms("jumping")?, vec!["jump", "leap"]);
    assert_eq!(augmenter.get_synonyms("foxes")?, vec!["fox", "vulpes vulpes"]);
    assert_eq!(augmenter.get_synonyms("ran")?, vec!["run", "sprint"]);
    assert!(augmenter.get_synonyms("zebras")?.is_empty());

    let sentence = "the quick brown fox jumps";
    let replaced = augmenter.synonym_replacement(sentence, 1)?;
    assert!(replaced.starts_with("the "));
    assert_ne!(replaced, sentence);

    Ok(())
}

#[test]
fn test_json_dictionary_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("synonyms.json");
    fs::write(&path, r#"[["happy", "glad", "felicitous"], ["happy", "well-chosen"]]"#)?;

    let dictionary = SynonymDictionary::load_from_file(&path)?;
    assert_eq!(dictionary.lookup("Happy")?.len(), 5);

    let augmenter = Augmenter::new(&BuiltinStopWords, Arc::new(dictionary))?;
    assert_eq!(
        augmenter.get_synonyms("happy")?,
        vec!["glad", "felicitous", "well chosen"]
    );

    Ok(())
}

#[test]
fn test_invalid_dictionary_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("synonyms.json");
    fs::write(&path, r#"{"happy": "glad"}"#).unwrap();

    let result = SynonymDictionary::load_from_file(&path);
    assert!(matches!(result, Err(LexaugError::Parse(_))));
}

#[test]
fn test_directory_stop_words() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("english"), "the\n\n  fox  \n")?;

    let provider = DirectoryStopWords::new(temp_dir.path());
    let stop_words = provider.load("english")?;
    assert_eq!(stop_words.len(), 2);
    assert!(stop_words.contains("fox"));

    let dictionary = SynonymDictionary::from_senses(vec![vec!["fox".into(), "dodger".into()]]);
    let augmenter = Augmenter::new(&provider, Arc::new(dictionary))?;
    assert_eq!(augmenter.synonym_replacement("the fox", 2)?, "the fox");

    Ok(())
}

#[test]
fn test_missing_stop_words_fail_construction() {
    let temp_dir = TempDir::new().unwrap();
    let provider = DirectoryStopWords::new(temp_dir.path());
    let result = Augmenter::new(&provider, Arc::new(SynonymDictionary::new()));
    assert!(matches!(result, Err(LexaugError::Resource(_))));

    let config = AugmentConfig {
        language: "klingon".to_string(),
        ..Default::default()
    };
    let result = Augmenter::with_config(&BuiltinStopWords, Arc::new(SynonymDictionary::new()), config);
    assert!(result.is_err());
}

#[test]
fn test_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"max_replacements": 4, "operations": ["random_swap"], "seed": 11}"#,
    )?;

    let config = AugmentConfig::from_file(&path)?;
    assert_eq!(config.max_replacements, 4);
    assert_eq!(config.insertions, 2);
    assert_eq!(config.seed, Some(11));

    fs::write(&path, r#"{"deletion_probability": 2.0}"#)?;
    assert!(AugmentConfig::from_file(&path).is_err());

    fs::write(&path, r#"{"operations": []}"#)?;
    assert!(AugmentConfig::from_file(&path).is_err());

    Ok(())
}
