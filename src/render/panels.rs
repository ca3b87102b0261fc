//! Text for the four dashboard panels. Each function is handed the slice of
//! dashboard state it needs and returns newline-terminated plain text; the
//! hardware panel can optionally embed ANSI color sequences.

use std::fmt::Write;

use crate::format::pad_column;
use crate::render::bar::Bar;
use crate::render::chart;
use crate::system::process::ProcessInfo;
use crate::system::snapshot::Snapshot;

pub const SEPARATOR_WIDTH: usize = 60;

const PID_WIDTH: usize = 8;
const NAME_WIDTH: usize = 20;
const CPU_WIDTH: usize = 8;
const MEM_WIDTH: usize = 8;
const STATUS_WIDTH: usize = 10;

/// Labels and their padded prefix, in panel order.
pub const HARDWARE_LABELS: [(&str, &str); 3] =
    [("CPU", "CPU:   "), ("Memory", "Memory:"), ("Disk", "Disk:  ")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    Plain,
    Ansi,
}

/// The three hardware readings in panel order.
pub fn hardware_values(snapshot: &Snapshot) -> [f64; 3] {
    [
        snapshot.cpu_percent,
        snapshot.memory_percent,
        snapshot.disk_percent,
    ]
}

pub fn hardware_line(prefix: &str, value: f64, bar_length: usize, style: BarStyle) -> String {
    let bar = Bar::new(value, bar_length);
    let bar_text = match style {
        BarStyle::Plain => bar.plain(),
        BarStyle::Ansi => bar.ansi(),
    };
    format!("{prefix} {bar_text} {value:.2}%\n")
}

pub fn hardware_panel(snapshot: &Snapshot, bar_length: usize, style: BarStyle) -> String {
    HARDWARE_LABELS
        .iter()
        .zip(hardware_values(snapshot))
        .map(|(&(_, prefix), value)| hardware_line(prefix, value, bar_length, style))
        .collect()
}

pub fn network_panel(snapshot: &Snapshot) -> String {
    format!(
        "In:  {} KB/s\nOut: {} KB/s\n",
        snapshot.network_in, snapshot.network_out
    )
}

pub fn process_header() -> String {
    format!(
        "{:<PID_WIDTH$} {:<NAME_WIDTH$} {:<CPU_WIDTH$} {:<MEM_WIDTH$} {:<STATUS_WIDTH$}",
        "PID", "Name", "CPU%", "Mem%", "Status"
    )
}

pub fn process_row(process: &ProcessInfo) -> String {
    format!(
        "{:<PID_WIDTH$} {} {:<CPU_WIDTH$.2} {:<MEM_WIDTH$.2} {:<STATUS_WIDTH$}",
        process.pid,
        pad_column(&process.name, NAME_WIDTH),
        process.cpu_percent,
        process.memory_percent,
        process.status.label(),
    )
}

/// Header, separator, then one row per process in snapshot order.
pub fn process_panel(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", process_header());
    let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    for process in &snapshot.processes {
        let _ = writeln!(out, "{}", process_row(process));
    }
    out
}

pub fn chart_panel(history: &[f64], width: usize, height: usize) -> String {
    chart::render_text(history, width, height)
}
