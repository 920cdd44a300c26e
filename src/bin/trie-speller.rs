//! Trie Speller CLI binary.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use trie_speller::loader::load_from_path;
use trie_speller::report::{check_text, Renderer};
use trie_speller::LoadOptions;

/// Check the spelling of a sentence against a word list
#[derive(Parser, Debug)]
#[command(name = "trie-speller")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Args {
    /// Word list with whitespace-separated lowercase words
    #[arg(
        short,
        long,
        env = "TRIE_SPELLER_DICTIONARY",
        default_value = "words.txt"
    )]
    dictionary: PathBuf,

    /// Refuse to load a word list containing words outside a-z
    #[arg(long)]
    strict: bool,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Text to check; a line is read from stdin when omitted
    #[arg(name = "TEXT")]
    text: Vec<String>,
}

impl Args {
    fn log_filter(&self) -> EnvFilter {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }

    fn load_options(&self) -> LoadOptions {
        if self.strict {
            LoadOptions::strict()
        } else {
            LoadOptions::default()
        }
    }
}

const RULE: &str =
    "===================================================================================================";

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter())
        .with_writer(io::stderr)
        .init();

    let dictionary = match load_from_path(&args.dictionary, &args.load_options()) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            error!("{}", e);
            eprintln!("Could not load dictionary");
            process::exit(1);
        }
    };

    let color = !args.no_color && io::stdout().is_terminal();
    if let Err(e) = run(&args, &dictionary, Renderer::new(color)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args, dictionary: &trie_speller::Dictionary, renderer: Renderer) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", RULE)?;
    writeln!(out, "\t\t\t\t\tSpell Checker")?;
    writeln!(out, "{}", RULE)?;

    let text = if args.text.is_empty() {
        write!(out, "Enter the sentence to be checked (Only Characters):")?;
        out.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        line
    } else {
        args.text.join(" ")
    };
    writeln!(out)?;

    let report = check_text(dictionary, &text);
    renderer.render(&report, &mut out)?;
    writeln!(out, "{}", RULE)?;

    Ok(())
}
