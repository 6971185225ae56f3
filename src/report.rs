/*!
 * Run state and summary reporting
 *
 * `ExportRun` carries the transient counters and status log for one
 * operation; `Reporter` renders the final summary with the tabled library
 * for clean, consistent table rendering.
 */

use std::sync::Arc;
use std::time::Duration;

use indicatif::ProgressBar;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

/// Transient state for one export operation. Created at the start of a
/// run, discarded after the summary is reported.
pub struct ExportRun {
    /// Files whose content landed in the artifact
    pub files_written: usize,
    /// Relative paths written (path-export mode)
    pub paths_written: usize,
    /// Per-file read failures and unresolved selections
    pub errors: usize,
    /// Sequential status log, in emission order
    pub lines: Vec<String>,
    /// Live progress display shared with the presentation layer
    progress: Arc<ProgressBar>,
}

impl ExportRun {
    /// Create run state bound to a progress bar
    pub fn new(progress: Arc<ProgressBar>) -> Self {
        Self {
            files_written: 0,
            paths_written: 0,
            errors: 0,
            lines: Vec::new(),
            progress,
        }
    }

    /// Record a status line and mirror it to the live progress display
    pub fn log(&mut self, message: String) {
        self.progress.set_message(message.clone());
        self.lines.push(message);
    }
}

/// Summary of a finished operation
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Operation name
    pub operation: String,
    /// Output artifact path, if the operation wrote one
    pub output_file: Option<String>,
    /// Time taken for the whole run
    pub duration: Duration,
    /// Files whose content landed in the artifact
    pub files_written: usize,
    /// Relative paths written (path-export mode)
    pub paths_written: usize,
    /// Per-file errors encountered
    pub errors: usize,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string based on run results
    pub fn generate_report(&self, report: &ExportReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ExportReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create the summary table using the tabled crate
    fn create_summary_table(&self, report: &ExportReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = Vec::new();

        rows.push(SummaryRow {
            key: "🔧 Operation".to_string(),
            value: report.operation.clone(),
        });

        if let Some(output) = &report.output_file {
            rows.push(SummaryRow {
                key: "📂 Output File".to_string(),
                value: output.clone(),
            });
        }

        rows.push(SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        if report.paths_written > 0 {
            rows.push(SummaryRow {
                key: "📄 Paths Written".to_string(),
                value: report.paths_written.to_string(),
            });
        } else {
            rows.push(SummaryRow {
                key: "📄 Files Written".to_string(),
                value: report.files_written.to_string(),
            });
        }

        rows.push(SummaryRow {
            key: "⚠️ Errors".to_string(),
            value: report.errors.to_string(),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ExportReport) -> String {
        let title = if report.errors > 0 {
            "✅  EXPORT COMPLETE (WITH ERRORS)"
        } else {
            "✅  EXPORT COMPLETE"
        };

        format!("{}\n{}", title, self.create_summary_table(report))
    }
}
