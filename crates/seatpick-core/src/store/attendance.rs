//! Attendance export: plain text with `Absent:`, `Tardy:`, and `Present:`
//! sections, each a comma-space-joined sorted name list or `None`.

use std::fs;
use std::path::Path;

use crate::attendance::AttendanceReport;
use crate::error::Result;

pub fn render(report: &AttendanceReport) -> String {
    let sections = [
        ("Absent:", &report.absent),
        ("Tardy:", &report.tardy),
        ("Present:", &report.present),
    ];

    let mut lines: Vec<String> = Vec::new();
    for (heading, names) in sections {
        lines.push(heading.to_string());
        lines.push(String::new());
        lines.push(if names.is_empty() {
            "None".to_string()
        } else {
            names.join(", ")
        });
        lines.push(String::new());
    }
    lines.pop(); // no trailing blank line after the last section
    lines.join("\n") + "\n"
}

pub fn save(report: &AttendanceReport, path: &Path) -> Result<()> {
    fs::write(path, render(report))?;
    Ok(())
}
