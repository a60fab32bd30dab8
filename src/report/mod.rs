//! Report generation

pub mod generator;

use crate::models::TimerReport;

pub fn generate_report(report: &TimerReport) -> String {
    generator::generate_markdown_report(report)
}
