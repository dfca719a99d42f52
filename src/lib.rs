//! 계산/차트/자산 로직을 라이브러리로 분리하여 GUI와 CLI가 함께 사용한다.

pub mod app;
pub mod assets;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod i18n;
pub mod scenario;
pub mod ui_cli;
