//! Command-line interface for eolscan.
//!
//! This binary provides access to the eolscan library functionality,
//! scanning a file tree for matching files, reporting their line-ending
//! convention, and optionally rewriting them to a uniform style.

use clap::{Parser, ValueEnum};
use eolscan::{
    EolscanBuilder, EolscanOptions, LineEndingVariant, ScanResult, eolscan, output,
};
use std::path::PathBuf;
use std::process::exit;

/// eolscan — line-ending scanner and converter
#[derive(Parser)]
#[command(name = "eolscan", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Glob pattern selecting files, e.g. "src/**/*.rs" (can be repeated;
    /// all files if none given)
    #[arg(short = 'g', long = "glob")]
    patterns: Vec<String>,

    /// Rewrite matched files to this style: lf/unix, crlf/win, or cr/mac
    #[arg(long, value_name = "STYLE", value_parser = parse_target)]
    convert: Option<LineEndingVariant>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// File size limit in bytes (larger files are skipped; default 10 MiB)
    #[arg(long)]
    file_size_limit: Option<u64>,

    /// Include hidden files
    #[arg(long)]
    hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Disable .gitignore handling
    #[arg(long)]
    no_gitignore: bool,

    /// Scan binary-looking files too (skipped by default)
    #[arg(long)]
    include_binary: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => output::OutputFormat::Text,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

/// Parse a line-ending style name into a conversion target.
fn parse_target(s: &str) -> Result<LineEndingVariant, String> {
    LineEndingVariant::from_alias(s).ok_or_else(|| {
        format!(
            "unrecognized line-ending style: {} (expected lf/unix, crlf/win, or cr/mac)",
            s
        )
    })
}

impl Cli {
    fn into_options(self) -> (EolscanOptions, OutputFormat, bool, Option<PathBuf>) {
        let mut builder = EolscanBuilder::new(self.root)
            .patterns(self.patterns)
            .target(self.convert)
            .respect_gitignore(!self.no_gitignore)
            .include_hidden(self.hidden)
            .follow_links(self.follow_links)
            .skip_binary(!self.include_binary);

        if let Some(limit) = self.file_size_limit {
            builder = builder.file_size_limit(Some(limit));
        }
        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (builder.build(), self.format, self.pretty, self.output)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format, pretty, output_path) = cli.into_options();

    match eolscan(options) {
        Ok(result) => output_result(&result, format, pretty, output_path),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn output_result(
    result: &ScanResult,
    format: OutputFormat,
    pretty: bool,
    output_path: Option<PathBuf>,
) {
    if let Some(path) = output_path {
        if let Err(e) = output::write_result_to_file(result, format.into(), &path, pretty) {
            eprintln!("Error: {}", e);
            exit(1);
        }
        return;
    }
    print!("{}", output::format_result(result, format.into(), pretty));
}
