use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{ResolvedKeybinds, key_label};
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    keybinds: &ResolvedKeybinds,
    tick: u64,
    interval: Duration,
    source_name: &str,
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    let info = format!(
        "tick {tick} \u{b7} every {:.1}s \u{b7} {source_name} ",
        interval.as_secs_f64()
    );
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(info.chars().count() as u16)])
        .split(area);

    let quit = key_label(keybinds.quit);
    let refresh = key_label(keybinds.refresh);
    let theme_key = key_label(keybinds.cycle_theme);
    let help = key_label(keybinds.help);
    let mut spans = Vec::new();
    spans.extend(pill_spans(&quit, "Quit", theme));
    spans.extend(pill_spans(&refresh, "Refresh", theme));
    spans.extend(pill_spans(&theme_key, "Theme", theme));
    spans.extend(pill_spans(&help, "Help", theme));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            info,
            Style::default()
                .fg(theme.pill_desc_fg)
                .add_modifier(Modifier::BOLD),
        )))
        .style(bg_style),
        chunks[1],
    );
}

fn pill_spans<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
