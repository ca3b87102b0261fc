pub mod action;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod event;
pub mod format;
pub mod headless;
pub mod logging;
pub mod render;
pub mod system;
pub mod ui;
