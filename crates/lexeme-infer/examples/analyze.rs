use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use lexeme_infer::{MorphologicalAnalyzer, TaggerStrategy};
use lexeme_types::PartOfSpeech;

const USAGE: &str = "usage: cargo run -p lexeme-infer --example analyze -- [--lexicon <path>]";

fn main() -> Result<()> {
    init_tracing();

    let mut analyzer = MorphologicalAnalyzer::default();
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        None => {}
        Some("--lexicon") => {
            let path: PathBuf = args.next().map(PathBuf::from).context(USAGE)?;
            match TaggerStrategy::from_lexicon(&path) {
                Ok(strategy) => analyzer.set_strategy(Box::new(strategy)),
                Err(err) => {
                    warn!("tagger unavailable ({err}), using heuristic inference");
                }
            }
        }
        Some(_) => bail!(USAGE),
    }

    let lemmas: Vec<String> = vec!["run".into(), "box".into(), "happy".into()];
    let pos_by_lemma = HashMap::from([
        ("run".to_string(), PartOfSpeech::Verb),
        ("box".to_string(), PartOfSpeech::Noun),
        ("happy".to_string(), PartOfSpeech::Adjective),
    ]);
    let forms_by_lemma = HashMap::from([
        (
            "run".to_string(),
            vec!["running".to_string(), "ran".to_string(), "runs".to_string()],
        ),
        (
            "box".to_string(),
            vec!["boxes".to_string(), "boxes'".to_string()],
        ),
        (
            "happy".to_string(),
            vec!["happier".to_string(), "happiest".to_string()],
        ),
    ]);

    println!("Strategy: {}", analyzer.strategy_name());
    let results = analyzer.analyze(&lemmas, &pos_by_lemma, &forms_by_lemma);
    for lemma in &lemmas {
        println!("\n{lemma}:");
        for wf in &results[lemma] {
            println!("  {:<12} {:<8} {}", wf.form, wf.ending, wf.features.summary());
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .init();
}
