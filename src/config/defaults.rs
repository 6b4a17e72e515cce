pub(crate) fn default_page_count() -> u32 {
    28
}

pub(crate) fn default_image_dir() -> String {
    "imgs".to_string()
}

pub(crate) fn default_image_stem() -> String {
    "arizonaserif".to_string()
}

pub(crate) fn default_image_extension() -> String {
    "png".to_string()
}

pub(crate) fn default_page_width() -> f32 {
    504.0
}

pub(crate) fn default_page_height() -> f32 {
    672.0
}

pub(crate) fn default_window_width() -> f32 {
    1200.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_flip_duration_ms() -> u64 {
    650
}

pub(crate) fn default_drag_width_fraction() -> f32 {
    0.45
}

pub(crate) fn default_commit_threshold() -> f32 {
    0.35
}

pub(crate) fn default_loop_to_cover() -> bool {
    true
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_next_page() -> String {
    "right".to_string()
}

pub(crate) fn default_key_prev_page() -> String {
    "left".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}
