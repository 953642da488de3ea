// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (final result only), and JSON output modes.

use crate::diagnostics::Warning;
use crate::sequence::BatchReport;
use serde::Serialize;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print a collected warning (suppressed in quiet mode).
    pub fn warning(&self, warning: &Warning) {
        match self.mode {
            OutputMode::Normal => eprintln!("Warning: {}", warning.message),
            OutputMode::Quiet => {}
            OutputMode::Json => self.emit_stderr(&JsonEvent {
                event: "warning",
                message: &warning.message,
                kind: Some(warning.kind.as_str()),
                duration_secs: None,
                report: None,
            }),
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => {
                println!("{message}");
            }
            OutputMode::Json => self.emit_stdout(&JsonEvent {
                event: "success",
                message,
                kind: None,
                duration_secs: self.duration(),
                report: None,
            }),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => self.emit_stderr(&JsonEvent {
                event: "error",
                message,
                kind: None,
                duration_secs: self.duration(),
                report: None,
            }),
        }
    }

    /// Print the aggregated outcome of a command.
    pub fn report(&self, title: &str, report: &BatchReport) {
        match self.mode {
            OutputMode::Normal => {
                for phase in &report.phases {
                    println!(
                        "  {}: {} sent, {} ok, {} failed",
                        phase.label, phase.submitted, phase.succeeded, phase.failed
                    );
                    if phase.withheld > 0 || phase.abandoned > 0 {
                        println!(
                            "    {} not sent, {} abandoned in flight",
                            phase.withheld, phase.abandoned
                        );
                    }
                }
                if let Some(fallback) = &report.fallback {
                    println!(
                        "  {} (on interrupt): {} sent, {} ok, {} failed",
                        fallback.label, fallback.submitted, fallback.succeeded, fallback.failed
                    );
                }
                for failure in report.failures() {
                    println!("  ✗ {}: {}", failure.url, failure.error);
                }
                self.success(&format!(
                    "{title}: {}/{} request(s) answered",
                    report.total_succeeded(),
                    report.total_submitted()
                ));
            }
            OutputMode::Quiet => {
                println!(
                    "{title}: {}/{} request(s) answered",
                    report.total_succeeded(),
                    report.total_submitted()
                );
            }
            OutputMode::Json => self.emit_stdout(&JsonEvent {
                event: "report",
                message: title,
                kind: None,
                duration_secs: self.duration(),
                report: Some(report),
            }),
        }
    }

    fn emit_stdout(&self, event: &JsonEvent<'_>) {
        if let Ok(json) = serde_json::to_string(event) {
            println!("{json}");
        }
    }

    fn emit_stderr(&self, event: &JsonEvent<'_>) {
        if let Ok(json) = serde_json::to_string(event) {
            eprintln!("{json}");
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a BatchReport>,
}
