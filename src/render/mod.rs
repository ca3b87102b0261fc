//! Pure text rendering: no terminal backend or runtime types in here.

pub mod bar;
pub mod chart;
pub mod panels;
