use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::render::bar::Bar;
use crate::render::chart;
use crate::render::panels::{
    HARDWARE_LABELS, SEPARATOR_WIDTH, hardware_values, network_panel, process_header, process_row,
};
use crate::system::snapshot::Snapshot;
use crate::ui::theme::{BorderStyle, Theme};

fn panel_block<'a>(title: &'a str, theme: &Theme, border_style: BorderStyle) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_style.border_type())
        .border_style(Style::default().fg(theme.panel_border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.panel_title)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Draws the frame and returns the inner area, or `None` when there is no
/// room for content this frame.
fn draw_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    theme: &Theme,
    border_style: BorderStyle,
) -> Option<Rect> {
    let block = panel_block(title, theme, border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        tracing::trace!(panel = title, "panel too small, skipped");
        return None;
    }
    Some(inner)
}

pub fn render_hardware(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    bar_length: usize,
    theme: &Theme,
    border_style: BorderStyle,
) {
    let Some(inner) = draw_frame(frame, area, " Hardware ", theme, border_style) else {
        return;
    };

    let lines: Vec<Line> = HARDWARE_LABELS
        .iter()
        .zip(hardware_values(snapshot))
        .map(|(&(_, prefix), value)| {
            let bar = Bar::new(value, bar_length);
            Line::from(vec![
                Span::styled(
                    format!("{prefix} "),
                    Style::default().fg(theme.text_primary),
                ),
                Span::styled(
                    bar.plain(),
                    Style::default()
                        .fg(theme.band_color(bar.band))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {value:.2}%"),
                    Style::default().fg(theme.text_secondary),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_network(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    theme: &Theme,
    border_style: BorderStyle,
) {
    let Some(inner) = draw_frame(frame, area, " Network (KB/s) ", theme, border_style) else {
        return;
    };
    let lines: Vec<Line> = network_panel(snapshot)
        .lines()
        .map(|l| Line::styled(l.to_string(), Style::default().fg(theme.text_primary)))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_processes(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    theme: &Theme,
    border_style: BorderStyle,
) {
    let Some(inner) = draw_frame(frame, area, " Running Processes ", theme, border_style) else {
        return;
    };

    let mut lines = vec![
        Line::styled(
            process_header(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "-".repeat(SEPARATOR_WIDTH),
            Style::default().fg(theme.panel_border),
        ),
    ];
    lines.extend(snapshot.processes.iter().map(|p| {
        Line::styled(process_row(p), Style::default().fg(theme.text_secondary))
    }));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// The chart is `chart_width x chart_height`, shrunk to fit the panel, and
/// sits in the panel's top-left corner.
pub fn render_chart(
    frame: &mut Frame,
    area: Rect,
    history: &[f64],
    chart_width: usize,
    chart_height: usize,
    theme: &Theme,
    border_style: BorderStyle,
) {
    let Some(inner) = draw_frame(frame, area, " CPU history ", theme, border_style) else {
        return;
    };
    let width = chart_width.min(inner.width as usize);
    let height = chart_height.min(inner.height as usize);
    let grid = chart::render(history, width, height);
    let lines: Vec<Line> = grid.lines().into_iter().map(Line::from).collect();
    let target = Rect::new(inner.x, inner.y, width as u16, height as u16);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(theme.chart_color)),
        target,
    );
}
