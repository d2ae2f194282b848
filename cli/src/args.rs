use clap::{Args, Parser, Subcommand};
use docrank_core::{DocId, DocumentStatus};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docrank")]
#[command(about = "Index short documents in memory and run TF-IDF queries against them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where documents come from and which words to ignore.
#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Input path (JSON/JSONL file or a directory of them)
    #[arg(long)]
    pub input: PathBuf,
    /// Space-separated stop words
    #[arg(long, default_value = "")]
    pub stop_words: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the top documents for a query
    Search {
        #[command(flatten)]
        index: IndexArgs,
        /// Query text; prefix a word with `-` to exclude documents containing it
        #[arg(long)]
        query: String,
        /// Only return documents with this status
        #[arg(long, default_value_t = DocumentStatus::Actual)]
        status: DocumentStatus,
        /// Results per printed page
        #[arg(long, default_value = "2")]
        page_size: NonZeroUsize,
        /// Remove duplicate documents before searching
        #[arg(long, default_value_t = false)]
        dedup: bool,
        /// Print results as a JSON array instead of pages
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show which query words a document matches
    Match {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(long)]
        query: String,
        #[arg(long)]
        id: DocId,
    },
    /// Remove documents whose word sets duplicate a lower id
    Dedup {
        #[command(flatten)]
        index: IndexArgs,
    },
    /// Replay a file of queries (one per line) and count empty results
    History {
        #[command(flatten)]
        index: IndexArgs,
        /// File with one query per line
        #[arg(long)]
        queries: PathBuf,
        #[arg(long, default_value_t = DocumentStatus::Actual)]
        status: DocumentStatus,
    },
}
