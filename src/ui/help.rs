use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{BorderStyle, Theme};

const KEY_COLUMN: usize = 8;

/// Centered overlay listing every keybind and what it does.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    entries: &[(String, &str)],
    theme: &Theme,
    border_style: BorderStyle,
) {
    let widest = entries
        .iter()
        .map(|(_, desc)| desc.width() + KEY_COLUMN + 4)
        .max()
        .unwrap_or(0);
    let width = (widest as u16 + 2).min(area.width.saturating_sub(4));
    // entries + blank + hint + borders
    let height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
    if width == 0 || height == 0 {
        return;
    }

    let overlay = centered_rect(width, height, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_style.border_type())
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Keybinds ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay);

    let mut lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:>KEY_COLUMN$} "),
                    Style::default()
                        .fg(theme.pill_key_fg)
                        .bg(theme.pill_key_bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {desc}"), Style::default().fg(theme.pill_desc_fg)),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        " Esc closes this window",
        Style::default().fg(theme.text_secondary),
    ));

    frame.render_widget(block, overlay);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.surface_bg)),
        inner,
    );
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [vert] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [horiz] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vert);
    horiz
}
