use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// List positioned text runs and redact sensitive strings from PDF documents.
#[derive(Debug, Parser)]
#[command(name = "pdfscrub", about, version)]
pub struct Cli {
    /// Log progress and skipped content to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the text runs of PDF pages with their bounding boxes
    Text {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5' or '4-'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },

    /// Remove sensitive strings, images and drawn codes from a PDF
    Redact {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Text to remove; any run containing it is cleared (repeatable)
        #[arg(long = "term", short = 't', value_name = "TEXT", required = true)]
        terms: Vec<String>,

        /// Where to write the redacted PDF
        #[arg(long, short = 'o', value_name = "OUT")]
        output: PathBuf,

        /// Leave image XObjects in place
        #[arg(long)]
        keep_images: bool,

        /// Do not strip vector groups that look like drawn codes
        #[arg(long)]
        no_vector_marks: bool,
    },
}

/// Output format for the text subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum TextFormat {
    /// One line per run: bounding box, then text
    Text,
    /// One JSON object per page
    Json,
}
