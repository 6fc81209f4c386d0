use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use structopt::StructOpt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use trieage::{Dump, DumpFormat, FileFormat, Wordlist};

/// Load a word list and answer questions about it.
#[derive(StructOpt)]
#[structopt(name = "trieage")]
struct Cli {
    /// The word list to read, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Split lines on this character
    #[structopt(long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word (with --delimiter)
    #[structopt(long)]
    column: Option<usize>,
    /// Skip lines starting with this character
    #[structopt(long)]
    comment: Option<char>,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Check whether each word is in the list
    Contains {
        words: Vec<String>,
    },
    /// Check whether any word starts with a prefix
    Prefix {
        prefix: String,
        /// Only count words longer than the prefix
        #[structopt(long)]
        ignore_whole_word: bool,
    },
    /// List the words starting with a prefix
    Complete {
        prefix: String,
        #[structopt(short, long)]
        limit: Option<usize>,
    },
    /// List every word
    List,
    /// Dump the trie (json, pretty-json, export or words)
    Dump {
        #[structopt(long, default_value = "json")]
        format: DumpFormat,
    },
    /// Print word and node counts
    Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::from_args();
    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.column)
        .comment(args.comment)
        .build();
    let wl = Wordlist::from_file(&args.path, &format)
        .with_context(|| format!("could not load {}", args.path.display()))?;

    let start = Instant::now();
    match args.command {
        Command::Contains { words } => {
            for word in words {
                println!("{}\t{}", word, wl.is_valid_word(&word));
            }
        }
        Command::Prefix { prefix, ignore_whole_word } => {
            println!("{}", wl.is_valid_prefix(&prefix, ignore_whole_word));
        }
        Command::Complete { prefix, limit } => {
            let words = wl.words_with_prefix(&prefix);
            for word in words.iter().take(limit.unwrap_or(usize::MAX)) {
                println!("{}", word);
            }
        }
        Command::List => {
            for word in wl.iter() {
                println!("{}", word);
            }
        }
        Command::Dump { format } => match wl.dump(format)? {
            Dump::Json(json) => println!("{}", json),
            Dump::Export(root) => println!("{}", serde_json::to_string_pretty(&root)?),
            Dump::Words(words) => words.iter().for_each(|x| println!("{}", x)),
        },
        Command::Stats => {
            println!("words\t{}", wl.len());
            println!("nodes\t{}", wl.node_count());
        }
    }
    debug!(seconds = start.elapsed().as_secs_f64(), "query finished");
    Ok(())
}
