use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use lexeme_inflect::FormGenerator;
use lexeme_types::PartOfSpeech;

const USAGE: &str =
    "usage: cargo run -p lexeme-inflect --example paradigm -- <resource-dir> [--demo | <lemma> <pos>]";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let resource_dir = args.next().map(PathBuf::from).context(USAGE)?;

    let requests: Vec<(String, PartOfSpeech)> = match args.next().as_deref() {
        Some("--demo") => vec![
            ("run".into(), PartOfSpeech::Verb),
            ("child".into(), PartOfSpeech::Noun),
            ("happy".into(), PartOfSpeech::Adjective),
            ("beautiful".into(), PartOfSpeech::Adjective),
            ("quickly".into(), PartOfSpeech::Adverb),
        ],
        Some(lemma) => {
            let pos_tag = args.next().context(USAGE)?;
            vec![(lemma.to_string(), parse_pos(&pos_tag)?)]
        }
        None => bail!(USAGE),
    };
    if args.next().is_some() {
        bail!("too many arguments");
    }

    let generator = FormGenerator::new(&resource_dir);
    println!("Resources: {}", resource_dir.display());

    for (lemma, pos) in requests {
        let marker = if generator.is_irregular(&lemma, pos) {
            " (irregular)"
        } else {
            ""
        };
        println!("\n{lemma} [{pos}]{marker}");
        for wf in generator.generate_all_forms(&lemma, pos) {
            println!("  {:<16} {:<8} {}", wf.form, wf.ending, wf.features.summary());
        }
    }

    Ok(())
}

fn parse_pos(tag: &str) -> Result<PartOfSpeech> {
    match tag.to_ascii_lowercase().as_str() {
        "noun" | "n" => Ok(PartOfSpeech::Noun),
        "verb" | "v" => Ok(PartOfSpeech::Verb),
        "adj" | "adjective" | "a" => Ok(PartOfSpeech::Adjective),
        "adv" | "adverb" | "r" => Ok(PartOfSpeech::Adverb),
        other => bail!("unsupported part of speech: {other}"),
    }
}
