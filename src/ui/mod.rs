pub mod help;
pub mod panels;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

/// Draws all four panels from a single view of the dashboard state.
pub fn draw(frame: &mut Frame, app: &App) {
    let _span = tracing::trace_span!("ui.draw").entered();
    let view = app.view();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(rows[0]);

    panels::render_hardware(
        frame,
        top[0],
        &view.latest,
        app.bar_length,
        &app.theme,
        app.border_style,
    );
    panels::render_network(frame, top[1], &view.latest, &app.theme, app.border_style);
    panels::render_chart(
        frame,
        top[2],
        &view.cpu_history,
        app.chart_width,
        app.chart_height,
        &app.theme,
        app.border_style,
    );
    panels::render_processes(frame, rows[1], &view.latest, &app.theme, app.border_style);

    statusbar::render(
        frame,
        rows[2],
        &app.keybinds,
        view.tick,
        app.refresh_interval,
        app.source_name,
        &app.theme,
    );

    // Help overlay — rendered last to appear on top
    if app.show_help() {
        help::render(
            frame,
            frame.area(),
            &app.help_entries(),
            &app.theme,
            app.border_style,
        );
    }
}

#[cfg(test)]
mod tests;
