use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    book: BookConfig,
    #[serde(default)]
    layout: LayoutConfig,
    #[serde(default)]
    animation: AnimationConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            page_count: tables.book.page_count,
            image_dir: tables.book.image_dir,
            image_stem: tables.book.image_stem,
            image_extension: tables.book.image_extension,
            page_width: tables.layout.page_width,
            page_height: tables.layout.page_height,
            window_width: tables.layout.window_width,
            window_height: tables.layout.window_height,
            flip_duration_ms: tables.animation.flip_duration_ms,
            drag_width_fraction: tables.animation.drag_width_fraction,
            commit_threshold: tables.animation.commit_threshold,
            loop_to_cover: tables.animation.loop_to_cover,
            theme: tables.appearance.theme,
            log_level: tables.logging.log_level,
            key_next_page: tables.keys.next_page,
            key_prev_page: tables.keys.prev_page,
            key_quit: tables.keys.quit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct BookConfig {
    #[serde(default = "defaults::default_page_count")]
    page_count: u32,
    #[serde(default = "defaults::default_image_dir")]
    image_dir: String,
    #[serde(default = "defaults::default_image_stem")]
    image_stem: String,
    #[serde(default = "defaults::default_image_extension")]
    image_extension: String,
}

impl Default for BookConfig {
    fn default() -> Self {
        BookConfig {
            page_count: defaults::default_page_count(),
            image_dir: defaults::default_image_dir(),
            image_stem: defaults::default_image_stem(),
            image_extension: defaults::default_image_extension(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LayoutConfig {
    #[serde(default = "defaults::default_page_width")]
    page_width: f32,
    #[serde(default = "defaults::default_page_height")]
    page_height: f32,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page_width: defaults::default_page_width(),
            page_height: defaults::default_page_height(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AnimationConfig {
    #[serde(default = "defaults::default_flip_duration_ms")]
    flip_duration_ms: u64,
    #[serde(default = "defaults::default_drag_width_fraction")]
    drag_width_fraction: f32,
    #[serde(default = "defaults::default_commit_threshold")]
    commit_threshold: f32,
    #[serde(default = "defaults::default_loop_to_cover")]
    loop_to_cover: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            flip_duration_ms: defaults::default_flip_duration_ms(),
            drag_width_fraction: defaults::default_drag_width_fraction(),
            commit_threshold: defaults::default_commit_threshold(),
            loop_to_cover: defaults::default_loop_to_cover(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next_page")]
    next_page: String,
    #[serde(default = "defaults::default_key_prev_page")]
    prev_page: String,
    #[serde(default = "defaults::default_key_quit")]
    quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next_page: defaults::default_key_next_page(),
            prev_page: defaults::default_key_prev_page(),
            quit: defaults::default_key_quit(),
        }
    }
}
