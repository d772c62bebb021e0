use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use crate::pipeline::VideoOutcome;
use crate::report::build_report;
use crate::report::json::render_report_json;
use crate::report::text::render_report_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Text,
    Both,
}

impl ReportFormat {
    fn json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }

    fn text(self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::Both)
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub const BATCH_FILE: &str = "batch.tsv";

/// Writes the per-video reports and returns the paths written.
pub fn write_reports(
    outcome: &VideoOutcome,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>, ReportError> {
    let Ok((set, eval)) = &outcome.result else {
        return Ok(Vec::new());
    };
    create_dir(out_dir)?;
    let data = build_report(set, eval);
    let mut written = Vec::new();

    if format.json() {
        let path = out_dir.join(format!("{}.moderation.json", outcome.input.stem));
        write_text(&path, &render_report_json(&data)?)?;
        written.push(path);
    }
    if format.text() {
        let path = out_dir.join(format!("{}.report.txt", outcome.input.stem));
        write_text(&path, &render_report_text(&data))?;
        written.push(path);
    }
    Ok(written)
}

pub fn write_batch_tsv(outcomes: &[VideoOutcome], out_dir: &Path) -> Result<PathBuf, ReportError> {
    create_dir(out_dir)?;
    let path = out_dir.join(BATCH_FILE);
    let io_err = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };
    let file = File::create(&path).map_err(io_err)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "input\tverdict\tretained\tmatched").map_err(io_err)?;
    for outcome in outcomes {
        let input = outcome.input.path.display();
        let line = match &outcome.result {
            Ok((_, eval)) => writeln!(
                w,
                "{}\t{}\t{}\t{}",
                input,
                eval.verdict,
                eval.n_retained,
                eval.matched_labels.join(";")
            ),
            Err(_) => writeln!(w, "{input}\terror\t0\t"),
        };
        line.map_err(io_err)?;
    }
    w.flush().map_err(io_err)?;
    Ok(path)
}

fn create_dir(dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.display().to_string(),
        source,
    })
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
