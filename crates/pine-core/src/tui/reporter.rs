//! Pipeline progress rendered with cliclack

use crate::generator::Reporter;

/// Prints pipeline progress as cliclack log lines
#[derive(Debug, Default, Clone, Copy)]
pub struct CliclackReporter;

impl Reporter for CliclackReporter {
    fn step(&self, index: usize, total: usize, message: &str) {
        let _ = cliclack::log::step(format!("[{}/{}] {}", index, total, message));
    }

    fn success(&self, message: &str) {
        let _ = cliclack::log::success(message);
    }

    fn info(&self, message: &str) {
        let _ = cliclack::log::info(message);
    }

    fn warning(&self, message: &str) {
        let _ = cliclack::log::warning(message);
    }

    fn snippet(&self, title: &str, content: &str) {
        let _ = cliclack::note(title, content.trim_end());
    }
}
