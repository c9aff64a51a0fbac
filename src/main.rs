use clap::Parser;
use serde::Serialize;
use speccyscan::decode::analysis_cap;
use speccyscan::registry::FormatTag;
use speccyscan::render::render_text;
use speccyscan::report::Report;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Parser)]
#[command(name = "speccyscan", about = "Identify and validate ZX Spectrum container files")]
struct Cli {
    /// Files or directories to scan (directories are walked recursively)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Emit one JSON object per file instead of text
    #[arg(long)]
    json: bool,

    /// Also report files whose extension is not in the registry
    #[arg(long)]
    all: bool,
}

/// JSON envelope: the report plus the path it belongs to.
#[derive(Serialize)]
struct FileReport<'a> {
    path:   &'a Path,
    report: Report,
}

fn main() {
    let cli = Cli::parse();

    for root in &cli.paths {
        let files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(DirEntry::into_path)
            .collect();

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let rendered: Vec<String> = files.par_iter().map(|p| scan_one(p, &cli)).collect();
            for chunk in rendered {
                print!("{chunk}");
            }
        }
        #[cfg(not(feature = "parallel"))]
        for path in &files {
            print!("{}", scan_one(path, &cli));
        }
    }
}

/// Decode one file and render its report.  Returns an empty string for
/// files the extension filter excludes; all output is accumulated so the
/// parallel path can keep per-file reports contiguous.
fn scan_one(path: &Path, cli: &Cli) -> String {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let tag = FormatTag::from_extension(&ext);
    if tag.is_none() && !cli.all {
        return String::new();
    }

    let declared_size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => return format!("{}\n  ** unreadable: {e}\n", path.display()),
    };

    // Over-cap files are rejected on declared size alone; skip the read.
    let over_cap = tag
        .and_then(analysis_cap)
        .is_some_and(|cap| declared_size >= cap);
    let data = if over_cap {
        Vec::new()
    } else {
        match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => return format!("{}\n  ** unreadable: {e}\n", path.display()),
        }
    };

    let report = speccyscan::decode(&ext, &data, declared_size);
    render(path, report, cli)
}

fn render(path: &Path, report: Report, cli: &Cli) -> String {
    if cli.json {
        let envelope = FileReport { path, report };
        match serde_json::to_string(&envelope) {
            Ok(json) => format!("{json}\n"),
            Err(e) => format!("{}\n  ** JSON rendering failed: {e}\n", path.display()),
        }
    } else {
        format!("{}\n{}", path.display(), render_text(&report))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}
