use std::io::{IsTerminal, stdout};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::KeyEventKind;

use dashtop::app::App;
use dashtop::config::{self, Config, load_config, load_config_from_path};
use dashtop::dashboard::{RefreshScheduler, SharedDashboard};
use dashtop::event::{Event, EventHandler};
use dashtop::headless::{self, OutputFormat};
use dashtop::logging;
use dashtop::render::panels::BarStyle;
use dashtop::system::source::MetricSampler;
use dashtop::ui;

#[derive(Parser)]
#[command(
    name = "dashtop",
    about = "Live terminal dashboard with utilization bars and a CPU history chart"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Metric source: synthetic, system
    #[arg(long)]
    source: Option<String>,

    /// Seed for the synthetic source
    #[arg(long)]
    seed: Option<u64>,

    /// Theme: dark, light, mono
    #[arg(long)]
    theme: Option<String>,

    /// Write JSON-lines logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value = "debug")]
    log_level: String,

    /// Print N ticks to stdout instead of starting the interactive dashboard
    #[arg(long, value_name = "N")]
    headless: Option<u64>,

    /// With --headless, print one JSON object per tick
    #[arg(long, default_value_t = false, requires = "headless")]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let level = logging::parse_level(&cli.log_level)?;
    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path, level)?;
    }

    let config = load_config_for_cli(&cli);
    config.validate()?;

    let source = config
        .source_kind()
        .build(config.general.seed, config.general.max_processes);
    let sampler = MetricSampler::new(source);
    tracing::info!(source = sampler.source_name(), "starting dashtop");

    if let Some(ticks) = cli.headless {
        let format = if cli.json {
            OutputFormat::Json
        } else if stdout().is_terminal() {
            OutputFormat::Text(BarStyle::Ansi)
        } else {
            OutputFormat::Text(BarStyle::Plain)
        };
        return headless::run(&config, sampler, ticks, format, &mut stdout().lock()).await;
    }

    // Also installs a panic hook that restores the terminal.
    let mut terminal = ratatui::try_init()?;

    let result = run(&mut terminal, config, sampler).await;

    ratatui::restore();

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    config: Config,
    sampler: MetricSampler,
) -> Result<()> {
    let source_name = sampler.source_name();
    let dashboard = SharedDashboard::new(config.chart.width);
    let mut events = EventHandler::new();
    let scheduler = RefreshScheduler::spawn(
        sampler,
        dashboard.clone(),
        config.refresh_interval(),
        events.sender(),
    );
    let mut app = App::new(&config, dashboard, scheduler.trigger(), source_name);

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        let should_draw = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = app.map_key(key);
                app.dispatch(action);
                true
            }
            Event::Key(_) => false,
            Event::Refreshed(_) | Event::Resize => true,
        };
        if should_draw {
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    scheduler.shutdown().await;
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(ref source) = cli.source {
        config.general.source = source.clone();
    }
    if cli.seed.is_some() {
        config.general.seed = cli.seed;
    }
    if let Some(ref theme) = cli.theme {
        config.colors.theme = theme.clone();
    }

    config
}
