use crate::config::ReportConfig;
use crate::pipeline::PipelineObserver;
use crate::{ImageMatrix, Result, SymmetryResult};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Line-per-step console report
    #[default]
    Text,
    /// One JSON document printed after the scan
    Json,
}

/// Space-separated lowercase hex of the first `limit` bytes.
pub fn hex_preview(bytes: &[u8], limit: usize) -> String {
    bytes
        .iter()
        .take(limit)
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Nested-list rendering, e.g. `[[1, 2], [3, 4]]`.
pub fn format_block(block: &[Vec<u8>]) -> String {
    format!("{:?}", block)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Writes each step of the run as soon as it completes.
pub struct TextReport<W: Write> {
    out: W,
    preview_bytes: usize,
    sample_size: usize,
}

impl TextReport<io::Stdout> {
    pub fn stdout(config: &ReportConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W, config: &ReportConfig) -> Self {
        Self {
            out,
            preview_bytes: config.preview_bytes,
            sample_size: config.sample_size,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PipelineObserver for TextReport<W> {
    fn on_bytes(&mut self, source: &Path, bytes: &[u8]) -> Result<()> {
        writeln!(self.out, "Read {} bytes from {}", bytes.len(), display_name(source))?;
        writeln!(
            self.out,
            "First {} bytes: {}",
            self.preview_bytes,
            hex_preview(bytes, self.preview_bytes)
        )?;
        Ok(())
    }

    fn on_matrix(&mut self, matrix: &ImageMatrix) -> Result<()> {
        writeln!(
            self.out,
            "Image converted to {}x{} grayscale matrix",
            matrix.width(),
            matrix.height()
        )?;
        writeln!(
            self.out,
            "Top-left {n}x{n} block: {}",
            format_block(&matrix.top_left(self.sample_size)),
            n = self.sample_size
        )?;
        Ok(())
    }

    fn on_result(&mut self, result: &SymmetryResult) -> Result<()> {
        match result.loss {
            Some(loss) => writeln!(
                self.out,
                "Best symmetry axis: column {} (loss {})",
                result.axis, loss
            )?,
            None => writeln!(
                self.out,
                "Best symmetry axis: column {} (no mirror pairs)",
                result.axis
            )?,
        }
        writeln!(
            self.out,
            "Left matrix: {}x{}",
            result.left.height(),
            result.left.width()
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// Machine-readable summary of one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub source: String,
    pub byte_count: usize,
    pub first_bytes: String,
    pub width: usize,
    pub height: usize,
    pub top_left: Vec<Vec<u8>>,
    pub scanner: String,
    pub axis: usize,
    pub loss: Option<u64>,
    pub left_rows: usize,
    pub left_cols: usize,
    pub processing_time_ms: f32,
}

/// Collects the run and renders it as JSON once the scan is done.
pub struct JsonReport {
    report: RunReport,
    preview_bytes: usize,
    sample_size: usize,
}

impl JsonReport {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            report: RunReport::default(),
            preview_bytes: config.preview_bytes,
            sample_size: config.sample_size,
        }
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.report)?)
    }
}

impl PipelineObserver for JsonReport {
    fn on_bytes(&mut self, source: &Path, bytes: &[u8]) -> Result<()> {
        self.report.source = display_name(source);
        self.report.byte_count = bytes.len();
        self.report.first_bytes = hex_preview(bytes, self.preview_bytes);
        Ok(())
    }

    fn on_matrix(&mut self, matrix: &ImageMatrix) -> Result<()> {
        self.report.width = matrix.width();
        self.report.height = matrix.height();
        self.report.top_left = matrix.top_left(self.sample_size);
        Ok(())
    }

    fn on_result(&mut self, result: &SymmetryResult) -> Result<()> {
        self.report.scanner = result.scanner_used.clone();
        self.report.axis = result.axis;
        self.report.loss = result.loss;
        self.report.left_rows = result.left.height();
        self.report.left_cols = result.left.width();
        self.report.processing_time_ms = result.processing_time_ms;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> ImageMatrix {
        ImageMatrix::from_rows(&[vec![1, 2, 3, 2, 1], vec![4, 5, 6, 5, 4]]).unwrap()
    }

    fn sample_result() -> SymmetryResult {
        let mut result = SymmetryResult::new("Naive");
        result.axis = 2;
        result.loss = Some(0);
        result.left = sample_matrix().crop_left(2);
        result
    }

    #[test]
    fn test_hex_preview() {
        assert_eq!(hex_preview(&[0xff, 0xd8, 0x00, 0x0a], 3), "ff d8 00");
        assert_eq!(hex_preview(&[0x89, 0x50], 20), "89 50");
        assert_eq!(hex_preview(&[], 20), "");
    }

    #[test]
    fn test_format_block() {
        assert_eq!(format_block(&[vec![1, 2], vec![3, 4]]), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn test_text_report_lines() {
        let mut report = TextReport::new(Vec::new(), &ReportConfig::default());
        report
            .on_bytes(Path::new("photos/inputphoto"), &[0x89, 0x50, 0x4e, 0x47])
            .unwrap();
        report.on_matrix(&sample_matrix()).unwrap();
        report.on_result(&sample_result()).unwrap();

        let text = String::from_utf8(report.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Read 4 bytes from inputphoto",
                "First 20 bytes: 89 50 4e 47",
                "Image converted to 5x2 grayscale matrix",
                "Top-left 5x5 block: [[1, 2, 3, 2, 1], [4, 5, 6, 5, 4]]",
                "Best symmetry axis: column 2 (loss 0)",
                "Left matrix: 2x2",
            ]
        );
    }

    #[test]
    fn test_text_report_without_mirror_pairs() {
        let mut report = TextReport::new(Vec::new(), &ReportConfig::default());
        report.on_result(&SymmetryResult::new("Naive")).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert!(text.starts_with("Best symmetry axis: column 0 (no mirror pairs)"));
    }

    #[test]
    fn test_json_report_collects_run() {
        let mut report = JsonReport::new(&ReportConfig::default());
        report.on_bytes(Path::new("inputphoto.jpg"), &[0xff, 0xd8]).unwrap();
        report.on_matrix(&sample_matrix()).unwrap();
        report.on_result(&sample_result()).unwrap();

        let parsed: RunReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(parsed.source, "inputphoto.jpg");
        assert_eq!(parsed.first_bytes, "ff d8");
        assert_eq!(parsed.axis, 2);
        assert_eq!(parsed.loss, Some(0));
        assert_eq!((parsed.left_rows, parsed.left_cols), (2, 2));
        assert_eq!(parsed.scanner, "Naive");
    }
}
