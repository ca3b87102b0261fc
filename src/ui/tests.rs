use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::action::Action;
use crate::app::App;
use crate::config::Config;
use crate::dashboard::{RefreshTrigger, SharedDashboard};
use crate::system::process::{ProcessInfo, ProcessState};
use crate::system::snapshot::Snapshot;
use crate::ui::panels;
use crate::ui::theme::{BandOverrides, BorderStyle, ColorSupport, Theme};

fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            let cell = buf.cell((x, y)).unwrap();
            out.push_str(cell.symbol());
        }
        if y + 1 < area.height {
            out.push('\n');
        }
    }
    out
}

fn render_to_buffer<F>(width: u16, height: u16, draw: F) -> ratatui::buffer::Buffer
where
    F: FnOnce(&mut ratatui::Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    terminal.backend().buffer().clone()
}

fn render_to_string<F>(width: u16, height: u16, draw: F) -> String
where
    F: FnOnce(&mut ratatui::Frame),
{
    buffer_to_string(&render_to_buffer(width, height, draw))
}

fn make_process(pid: u32, name: &str, cpu: f64, memory: f64) -> ProcessInfo {
    ProcessInfo {
        pid,
        name: name.to_string(),
        cpu_percent: cpu,
        memory_percent: memory,
        status: ProcessState::Running,
    }
}

fn make_snapshot() -> Snapshot {
    Snapshot {
        cpu_percent: 85.5,
        memory_percent: 62.0,
        disk_percent: 12.5,
        network_in: 640,
        network_out: 17,
        processes: vec![
            make_process(1, "docker", 0.25, 0.5),
            make_process(789, "db-server", 9.5, 7.25),
        ],
    }
}

fn make_theme() -> Theme {
    Theme::from_config("dark", &BandOverrides::default(), ColorSupport::Truecolor)
}

fn make_app() -> App {
    let mut config = Config::default();
    config.colors.support = "truecolor".to_string();
    let dashboard = SharedDashboard::new(config.chart.width);
    dashboard.apply(make_snapshot());
    App::new(&config, dashboard, RefreshTrigger::default(), "synthetic")
}

#[test]
fn full_dashboard_shows_all_panels() {
    let app = make_app();
    let output = render_to_string(120, 36, |frame| crate::ui::draw(frame, &app));

    for needle in [
        "Hardware",
        "Network (KB/s)",
        "CPU history",
        "Running Processes",
        "85.50%",
        "62.00%",
        "12.50%",
        "In:  640 KB/s",
        "Out: 17 KB/s",
        "PID      Name",
        "1        docker               0.25     0.50     Running",
        "789      db-server            9.50     7.25     Running",
        "tick 1",
        "synthetic",
    ] {
        assert!(output.contains(needle), "missing {needle:?} in:\n{output}");
    }
}

#[test]
fn processes_render_in_snapshot_order() {
    let app = make_app();
    let output = render_to_string(120, 36, |frame| crate::ui::draw(frame, &app));
    let docker = output.find("docker").unwrap();
    let db = output.find("db-server").unwrap();
    assert!(docker < db);
}

#[test]
fn hardware_bar_uses_band_colors() {
    let theme = make_theme();
    let snapshot = make_snapshot();
    let buf = render_to_buffer(30, 5, |frame| {
        panels::render_hardware(
            frame,
            Rect::new(0, 0, 30, 5),
            &snapshot,
            10,
            &theme,
            BorderStyle::Rounded,
        );
    });

    // Inner area starts at (1, 1); the bar follows the 8-column label.
    let cpu_bar = buf.cell((9, 1)).unwrap();
    assert_eq!(cpu_bar.symbol(), "\u{2588}");
    assert_eq!(cpu_bar.fg, theme.band_high);

    let mem_bar = buf.cell((9, 2)).unwrap();
    assert_eq!(mem_bar.fg, theme.band_medium);

    let disk_bar = buf.cell((9, 3)).unwrap();
    assert_eq!(disk_bar.fg, theme.band_low);
    // 12.5% of 10 cells -> one filled cell.
    assert_eq!(buf.cell((10, 3)).unwrap().symbol(), " ");
}

#[test]
fn chart_panel_fills_inner_area() {
    let theme = make_theme();
    let full = vec![100.0; 20];
    let output = render_to_string(12, 5, |frame| {
        panels::render_chart(
            frame,
            Rect::new(0, 0, 12, 5),
            &full,
            76,
            10,
            &theme,
            BorderStyle::Thin,
        );
    });
    let rows: Vec<&str> = output.lines().collect();
    for row in &rows[1..4] {
        let inner: String = row.chars().skip(1).take(10).collect();
        assert_eq!(inner, "\u{2588}".repeat(10));
    }
}

#[test]
fn empty_history_chart_only_lights_bottom_row() {
    let theme = make_theme();
    let output = render_to_string(12, 5, |frame| {
        panels::render_chart(
            frame,
            Rect::new(0, 0, 12, 5),
            &[],
            76,
            10,
            &theme,
            BorderStyle::Thin,
        );
    });
    let rows: Vec<String> = output
        .lines()
        .map(|r| r.chars().skip(1).take(10).collect())
        .collect();
    assert_eq!(rows[1], " ".repeat(10));
    assert_eq!(rows[2], " ".repeat(10));
    assert_eq!(rows[3], "\u{2588}".repeat(10));
}

#[test]
fn chart_panel_is_capped_at_configured_size() {
    let theme = make_theme();
    let full = vec![100.0; 30];
    let output = render_to_string(40, 12, |frame| {
        panels::render_chart(
            frame,
            Rect::new(0, 0, 40, 12),
            &full,
            20,
            4,
            &theme,
            BorderStyle::Thin,
        );
    });
    let rows: Vec<String> = output
        .lines()
        .map(|r| r.chars().skip(1).take(38).collect())
        .collect();
    let expected = format!("{}{}", "\u{2588}".repeat(20), " ".repeat(18));
    for row in &rows[1..5] {
        assert_eq!(row, &expected);
    }
    for row in &rows[5..11] {
        assert_eq!(row, &" ".repeat(38));
    }
}

#[test]
fn dashboard_chart_follows_chart_config() {
    let mut config = Config::default();
    config.colors.support = "truecolor".to_string();
    config.chart.width = 20;
    config.chart.height = 4;
    let dashboard = SharedDashboard::new(config.chart.width);
    for _ in 0..30 {
        dashboard.apply(Snapshot {
            cpu_percent: 100.0,
            ..Snapshot::default()
        });
    }
    let app = App::new(&config, dashboard, RefreshTrigger::default(), "synthetic");
    let output = render_to_string(200, 60, |frame| crate::ui::draw(frame, &app));

    let full_run = "\u{2588}".repeat(20);
    let longer_run = "\u{2588}".repeat(21);
    let chart_rows = output.lines().filter(|l| l.contains(&full_run)).count();
    assert_eq!(chart_rows, 4, "chart should be 4 rows:\n{output}");
    assert!(!output.contains(&longer_run));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = make_app();
    let _ = render_to_string(6, 4, |frame| crate::ui::draw(frame, &app));
    let _ = render_to_string(1, 1, |frame| crate::ui::draw(frame, &app));
}

#[test]
fn help_overlay_lists_keybinds() {
    let mut app = make_app();
    app.dispatch(Action::ToggleHelp);
    let output = render_to_string(100, 30, |frame| crate::ui::draw(frame, &app));
    assert!(output.contains("Keybinds"));
    assert!(output.contains("Refresh now"));
    assert!(output.contains("Quit (always)"));
}

#[test]
fn zeroed_dashboard_renders_defaults() {
    let mut config = Config::default();
    config.colors.support = "truecolor".to_string();
    let app = App::new(
        &config,
        SharedDashboard::new(76),
        RefreshTrigger::default(),
        "system",
    );
    let output = render_to_string(120, 36, |frame| crate::ui::draw(frame, &app));
    assert!(output.contains("In:  0 KB/s"));
    assert!(output.contains("0.00%"));
    assert!(output.contains("tick 0"));
}
