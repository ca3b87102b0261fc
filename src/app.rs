use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::dashboard::{DashboardView, RefreshTrigger, SharedDashboard};
use crate::ui::theme::{BandOverrides, BorderStyle, ColorSupport, Theme, resolve_color_support};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub refresh: KeyCode,
    pub cycle_theme: KeyCode,
    pub help: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            cycle_theme: parse_key(&kb.cycle_theme).unwrap_or(KeyCode::Char('t')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
        }
    }

    /// Returns (key_label, description) pairs for all configurable keybinds.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.refresh), "Refresh now"),
            (key_label(self.cycle_theme), "Cycle theme"),
            (key_label(self.help), "Toggle help"),
            ("Ctrl+C".to_string(), "Quit (always)"),
        ]
    }
}

pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => "?".to_string(),
    }
}

/// Foreground state: everything the UI needs besides the dashboard data,
/// which it reads from the shared handle on every draw.
pub struct App {
    pub running: bool,
    pub dashboard: SharedDashboard,
    pub input_mode: InputMode,
    pub theme: Theme,
    pub color_support: ColorSupport,
    pub border_style: BorderStyle,
    pub bar_length: usize,
    pub chart_width: usize,
    pub chart_height: usize,
    pub refresh_interval: Duration,
    pub source_name: &'static str,
    pub keybinds: ResolvedKeybinds,
    band_overrides: BandOverrides,
    trigger: RefreshTrigger,
}

impl App {
    pub fn new(
        config: &Config,
        dashboard: SharedDashboard,
        trigger: RefreshTrigger,
        source_name: &'static str,
    ) -> Self {
        let color_support = resolve_color_support(&config.colors.support);
        let band_overrides = BandOverrides::from_config(&config.colors);
        let theme = Theme::from_config(&config.colors.theme, &band_overrides, color_support);

        App {
            running: true,
            dashboard,
            input_mode: InputMode::Normal,
            theme,
            color_support,
            border_style: BorderStyle::from_config_str(&config.colors.border_style),
            bar_length: config.bars.length,
            chart_width: config.chart.width,
            chart_height: config.chart.height,
            refresh_interval: config.refresh_interval(),
            source_name,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            band_overrides,
            trigger,
        }
    }

    pub fn view(&self) -> DashboardView {
        self.dashboard.view()
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Help => self.map_key_help(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }
        if code == kb.cycle_theme {
            return Action::CycleTheme;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }

        Action::None
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        let code = key.code;
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if code == self.keybinds.help || code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Refresh => {
                tracing::debug!("refresh key pressed");
                self.trigger.request();
            }
            Action::CycleTheme => {
                self.theme = self.theme.next(&self.band_overrides, self.color_support);
            }
            Action::ToggleHelp => {
                self.input_mode = if self.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::None => {}
        }
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_app() -> App {
        let mut config = Config::default();
        config.colors.support = "truecolor".to_string();
        App::new(
            &config,
            SharedDashboard::new(config.chart.width),
            RefreshTrigger::default(),
            "synthetic",
        )
    }

    #[test]
    fn new_app_uses_config() {
        let app = make_test_app();
        assert!(app.running);
        assert_eq!(app.bar_length, 10);
        assert_eq!((app.chart_width, app.chart_height), (76, 10));
        assert_eq!(app.refresh_interval, Duration::from_secs(2));
        assert_eq!(app.theme.name, "dark");
        assert_eq!(app.view().tick, 0);
    }

    #[test]
    fn default_keybinds_map_to_actions() {
        let app = make_test_app();

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::Refresh);

        let key = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::CycleTheme);

        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::ToggleHelp);

        // Ctrl+C always quits
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);
    }

    #[test]
    fn custom_keybind_remap_works() {
        let mut app = make_test_app();

        // Remap quit to 'x'
        app.keybinds.quit = KeyCode::Char('x');

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::Quit);

        // 'q' should now do nothing
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);
    }

    #[test]
    fn help_mode_blocks_other_keys() {
        let mut app = make_test_app();

        app.dispatch(Action::ToggleHelp);
        assert_eq!(app.input_mode, InputMode::Help);
        assert!(app.show_help());

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);

        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::ToggleHelp);

        // Ctrl+C still works (safety)
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(key), Action::Quit);

        app.dispatch(Action::ToggleHelp);
        assert!(!app.show_help());
    }

    #[test]
    fn dispatch_quit_and_theme() {
        let mut app = make_test_app();
        app.dispatch(Action::CycleTheme);
        assert_eq!(app.theme.name, "light");
        app.dispatch(Action::Quit);
        assert!(!app.running);
    }

    #[test]
    fn help_entries_list_keybinds() {
        let app = make_test_app();
        let entries = app.help_entries();
        assert_eq!(entries[0], ("q".to_string(), "Quit"));
        assert!(entries.iter().any(|(k, _)| k == "Ctrl+C"));
    }
}
