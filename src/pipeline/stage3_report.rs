use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::info;

use crate::model::scores::ScoreResult;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{build_summary, domain_ratings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub const REPORT_FILE: &str = "report.txt";
pub const SUMMARY_FILE: &str = "summary.json";
pub const RATINGS_FILE: &str = "ratings.tsv";

/// Render the result the way it is printed to stdout.
pub fn render_result(result: &ScoreResult, format: OutputFormat) -> std::io::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_report_text(result)),
        OutputFormat::Json => Ok(render_summary_json(&build_summary(result))?),
    }
}

pub fn write_reports(result: &ScoreResult, out_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let report_path = out_dir.join(REPORT_FILE);
    write_text(&report_path, &render_report_text(result))?;

    let summary_path = out_dir.join(SUMMARY_FILE);
    write_text(&summary_path, &render_summary_json(&build_summary(result))?)?;

    let ratings_path = out_dir.join(RATINGS_FILE);
    write_ratings_tsv(result, &ratings_path)?;

    let written = vec![report_path, summary_path, ratings_path];
    for path in &written {
        info!(path = %path.display(), "wrote report file");
    }
    Ok(written)
}

fn write_ratings_tsv(result: &ScoreResult, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", ["domain", "name", "rating"].join("\t"))?;
    for row in domain_ratings(result) {
        writeln!(w, "{}\t{}\t{}", row.id, row.name, row.rating)?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
