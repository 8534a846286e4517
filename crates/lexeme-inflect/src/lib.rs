//! English inflection: spelling rules, irregular-form tables, and paradigm
//! generation.
//!
//! The crate has three layers, leaf first:
//! - [`spelling`]: pure string transforms (consonant doubling, silent-e
//!   dropping, y→i, sibilant pluralization, ending diffs). Total functions,
//!   shared verbatim with the inference side.
//! - [`irregular`]: override tables for irregular verbs, noun plurals, and
//!   adjective comparison, loaded from JSON resources. A missing or
//!   malformed file degrades that category to empty rather than failing.
//! - [`FormGenerator`]: produces a single inflected form for a lemma plus a
//!   sparse feature request, or the full canonical paradigm for a POS.
//!   Irregular entries win; spelling rules cover the rest.
//!
//! # Example
//! ```rust
//! use lexeme_inflect::FormGenerator;
//! use lexeme_types::{MorphologicalFeature, PartOfSpeech, Tense};
//!
//! let generator = FormGenerator::without_irregulars();
//! let past = MorphologicalFeature { tense: Some(Tense::Past), ..Default::default() };
//! let wf = generator.generate_form("hop", PartOfSpeech::Verb, &past);
//! assert_eq!(wf.form, "hopped");
//! assert_eq!(wf.ending, "-ped");
//! ```
//!
//! For a runnable demo, see
//! `cargo run -p lexeme-inflect --example paradigm -- <resource-dir> [--demo | <lemma> <pos>]`.

pub mod irregular;
pub mod spelling;

mod generator;

pub use generator::FormGenerator;
pub use irregular::{IrregularAdjective, IrregularTable, IrregularVerb};
