//! Sinks for per-epoch metric reports

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tracing::info;

/// Averaged metrics for one epoch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpochReport {
    /// Zero-based epoch index
    pub epoch: usize,
    /// Metric names; slot 0 is the loss
    pub names: Vec<String>,
    /// Metric values, parallel to `names`
    pub values: Vec<f32>,
}

impl EpochReport {
    /// Value of the metric called `name`
    pub fn get(&self, name: &str) -> Option<f32> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.values.get(i).copied())
    }

    /// Averaged loss (slot 0)
    pub fn loss(&self) -> Option<f32> {
        self.values.first().copied()
    }
}

/// Destination for epoch reports
pub trait Reporter {
    /// Emit one report
    fn report(&mut self, report: &EpochReport) -> Result<()>;
}

/// Emits reports as `tracing` events
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, report: &EpochReport) -> Result<()> {
        let metrics: Vec<String> = report
            .names
            .iter()
            .zip(&report.values)
            .map(|(n, v)| format!("{n}={v:.4}"))
            .collect();
        info!(epoch = report.epoch, metrics = %metrics.join(" "), "epoch metrics");
        Ok(())
    }
}

/// Prints `Epoch N: [v0, v1, ..]` to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, report: &EpochReport) -> Result<()> {
        println!("Epoch {}: {:?}", report.epoch, report.values);
        Ok(())
    }
}

/// Writes one JSON object per epoch to `writer`
pub struct JsonLinesReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesReporter<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn report(&mut self, report: &EpochReport) -> Result<()> {
        serde_json::to_writer(&mut self.writer, report).map_err(std::io::Error::from)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory report history; clones share the same storage
#[derive(Clone, Debug, Default)]
pub struct MetricsHistory {
    reports: Rc<RefCell<Vec<EpochReport>>>,
}

impl MetricsHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every report so far
    pub fn reports(&self) -> Vec<EpochReport> {
        self.reports.borrow().clone()
    }

    /// Most recent report
    pub fn last(&self) -> Option<EpochReport> {
        self.reports.borrow().last().cloned()
    }

    /// Number of reports
    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    /// True when nothing was reported
    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

impl Reporter for MetricsHistory {
    fn report(&mut self, report: &EpochReport) -> Result<()> {
        self.reports.borrow_mut().push(report.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EpochReport {
        EpochReport {
            epoch: 2,
            names: vec!["valid_loss".into(), "accuracy".into()],
            values: vec![0.25, 0.9],
        }
    }

    #[test]
    fn test_report_lookup() {
        let report = sample();
        assert_eq!(report.get("accuracy"), Some(0.9));
        assert_eq!(report.get("missing"), None);
        assert_eq!(report.loss(), Some(0.25));
    }

    #[test]
    fn test_history_shared_between_clones() {
        let history = MetricsHistory::new();
        let mut sink = history.clone();
        sink.report(&sample()).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.last(), Some(sample()));
        assert!(!history.is_empty());
    }

    #[test]
    fn test_json_lines_reporter() {
        let mut sink = JsonLinesReporter::new(Vec::new());
        sink.report(&sample()).unwrap();
        sink.report(&sample()).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: EpochReport = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_log_and_stdout_reporters() {
        LogReporter.report(&sample()).unwrap();
        StdoutReporter.report(&sample()).unwrap();
    }
}
