use super::defaults;
use flipbook_core::{FlipTuning, PageResources};
use serde::Deserialize;
use std::time::Duration;

/// Flattened application configuration.
///
/// The on-disk layout is grouped into tables (see `tables.rs`); the rest of
/// the app reads these flat fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub page_count: u32,
    pub image_dir: String,
    pub image_stem: String,
    pub image_extension: String,
    pub page_width: f32,
    pub page_height: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub flip_duration_ms: u64,
    pub drag_width_fraction: f32,
    pub commit_threshold: f32,
    pub loop_to_cover: bool,
    pub theme: ThemeMode,
    pub log_level: LogLevel,
    pub key_next_page: String,
    pub key_prev_page: String,
    pub key_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            page_count: defaults::default_page_count(),
            image_dir: defaults::default_image_dir(),
            image_stem: defaults::default_image_stem(),
            image_extension: defaults::default_image_extension(),
            page_width: defaults::default_page_width(),
            page_height: defaults::default_page_height(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            flip_duration_ms: defaults::default_flip_duration_ms(),
            drag_width_fraction: defaults::default_drag_width_fraction(),
            commit_threshold: defaults::default_commit_threshold(),
            loop_to_cover: defaults::default_loop_to_cover(),
            theme: ThemeMode::default(),
            log_level: defaults::default_log_level(),
            key_next_page: defaults::default_key_next_page(),
            key_prev_page: defaults::default_key_prev_page(),
            key_quit: defaults::default_key_quit(),
        }
    }
}

impl AppConfig {
    /// Session tunables. Forward flips sit one page width from the book origin.
    pub fn flip_tuning(&self) -> FlipTuning {
        FlipTuning {
            duration: Duration::from_millis(self.flip_duration_ms),
            drag_width_fraction: self.drag_width_fraction,
            commit_threshold: self.commit_threshold,
            flip_offset: self.page_width,
            loop_to_cover: self.loop_to_cover,
        }
    }

    pub fn page_resources(&self) -> flipbook_core::Result<PageResources> {
        PageResources::new(
            self.image_dir.clone(),
            self.image_stem.clone(),
            self.image_extension.clone(),
            self.page_count,
        )
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
