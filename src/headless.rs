//! Non-interactive mode: drive the same scheduler for a fixed number of
//! ticks and write each tick's panels to a writer instead of a terminal.

use std::io::Write;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::dashboard::{DashboardView, RefreshScheduler, SharedDashboard};
use crate::event::Event;
use crate::render::panels::{self, BarStyle};
use crate::system::source::MetricSampler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text(BarStyle),
    Json,
}

pub async fn run<W: Write>(
    config: &Config,
    sampler: MetricSampler,
    ticks: u64,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    if ticks == 0 {
        return Err(eyre!("--headless needs at least one tick"));
    }

    let dashboard = SharedDashboard::new(config.chart.width);
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let scheduler =
        RefreshScheduler::spawn(sampler, dashboard.clone(), config.refresh_interval(), tx);

    let mut written = 0;
    let mut last_tick = 0;
    while written < ticks {
        let Some(event) = rx.recv().await else {
            break;
        };
        if let Event::Refreshed(_) = event {
            let view = dashboard.view();
            // A late notification for a tick already printed.
            if view.tick <= last_tick {
                continue;
            }
            last_tick = view.tick;
            write_tick(config, &view, format, out)?;
            written += 1;
        }
    }
    scheduler.shutdown().await;

    if written < ticks {
        return Err(eyre!("refresh scheduler stopped after {written} of {ticks} ticks"));
    }
    Ok(())
}

pub fn write_tick<W: Write>(
    config: &Config,
    view: &DashboardView,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, view)?;
            writeln!(out)?;
        }
        OutputFormat::Text(style) => {
            writeln!(out, "== tick {} ==", view.tick)?;
            writeln!(out, "[Hardware]")?;
            write!(
                out,
                "{}",
                panels::hardware_panel(&view.latest, config.bars.length, style)
            )?;
            writeln!(out, "[Network (KB/s)]")?;
            write!(out, "{}", panels::network_panel(&view.latest))?;
            writeln!(out, "[Running Processes]")?;
            write!(out, "{}", panels::process_panel(&view.latest))?;
            writeln!(out, "[CPU history]")?;
            writeln!(
                out,
                "{}",
                panels::chart_panel(&view.cpu_history, config.chart.width, config.chart.height)
            )?;
        }
    }
    out.flush()?;
    Ok(())
}
