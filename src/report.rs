//! Checking text against a dictionary and rendering the outcome.
//!
//! [`check_text`] produces plain data; [`Renderer`] turns that data into
//! terminal output. Nothing in the dictionary or the suggestion engine
//! writes to the terminal.

use std::io::{self, Write};

use tracing::debug;

use crate::dictionary::Dictionary;
use crate::suggest::SuggestionEngine;
use crate::tokenizer::Tokenizer;

/// A word the dictionary didn't know, with its single-edit neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    /// The word as it appeared in the text
    pub word: String,
    /// Byte offset of the word in the text
    pub offset: usize,
    /// Dictionary words one edit away, in emission order
    pub suggestions: Vec<String>,
}

/// Outcome of checking a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// `Dictionary::size` at the time of the check
    pub dictionary_words: usize,
    /// Number of words the tokenizer produced
    pub words_checked: usize,
    /// Words not found, in text order
    pub misspellings: Vec<Misspelling>,
}

impl CheckReport {
    /// Returns `true` when every word was found.
    pub fn is_clean(&self) -> bool {
        self.misspellings.is_empty()
    }
}

/// Tokenizes `text` and checks every word.
///
/// Suggestions are only generated for words that fail the lookup.
///
/// # Examples
///
/// ```
/// use trie_speller::Dictionary;
/// use trie_speller::report::check_text;
///
/// let dictionary = Dictionary::from_words(["the", "cat", "sat"])?;
/// let report = check_text(&dictionary, "The xat sat.");
///
/// assert_eq!(report.words_checked, 3);
/// assert_eq!(report.misspellings[0].word, "xat");
/// assert_eq!(report.misspellings[0].suggestions, vec!["cat", "sat"]);
/// # Ok::<(), trie_speller::Error>(())
/// ```
pub fn check_text(dictionary: &Dictionary, text: &str) -> CheckReport {
    let engine = SuggestionEngine::new(dictionary);
    let mut report = CheckReport {
        dictionary_words: dictionary.size(),
        ..CheckReport::default()
    };

    for token in Tokenizer::new(text) {
        report.words_checked += 1;
        if dictionary.contains(token.text) {
            continue;
        }

        report.misspellings.push(Misspelling {
            word: token.text.to_string(),
            offset: token.offset,
            suggestions: engine.suggest(token.text),
        });
    }

    debug!(
        checked = report.words_checked,
        misspelled = report.misspellings.len(),
        "checked text"
    );

    report
}

const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const YELLOW: &str = "\x1b[1;33m";
const RESET: &str = "\x1b[0m";

/// Writes a [`CheckReport`] in human-readable form.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Creates a renderer; `color` enables ANSI escape codes.
    pub fn new(color: bool) -> Self {
        Renderer { color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Writes the misspelled words, each followed by its suggestions.
    pub fn render_misspellings<W: Write>(&self, report: &CheckReport, out: &mut W) -> io::Result<()> {
        writeln!(out, "==================")?;
        writeln!(out, "{}", self.paint(RED, "MISSPELLED WORDS:"))?;
        writeln!(out, "==================")?;

        for misspelling in &report.misspellings {
            writeln!(out, "{}", self.paint(RED, &misspelling.word))?;
            writeln!(
                out,
                "{} \"{}\":",
                self.paint(YELLOW, "Suggestions for"),
                self.paint(RED, &misspelling.word)
            )?;
            for suggestion in &misspelling.suggestions {
                writeln!(out, "- {}", self.paint(GREEN, suggestion))?;
            }
        }

        Ok(())
    }

    /// Writes the word counts.
    pub fn render_summary<W: Write>(&self, report: &CheckReport, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Dictionary word count: {}", report.dictionary_words)?;
        writeln!(out, "Sentence word count:   {}", report.words_checked)?;
        writeln!(out, "Misspelled words:      {}", report.misspellings.len())?;
        Ok(())
    }

    /// Writes the full report.
    pub fn render<W: Write>(&self, report: &CheckReport, out: &mut W) -> io::Result<()> {
        self.render_misspellings(report, out)?;
        self.render_summary(report, out)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(false)
    }
}
