#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Refresh,
    CycleTheme,
    ToggleHelp,
    None,
}
