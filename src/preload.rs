//! Page image preloading.
//!
//! Every page is decoded up front with the `image` crate so the first turn to
//! any spread does not stall on disk I/O. Failures are logged and skipped; the
//! view then falls back to loading that page from its path.

use anyhow::{Context, Result};
use flipbook_core::{PageIndex, PageResources};
use iced::widget::image::Handle;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

pub fn decode_page(path: &Path) -> Result<Handle> {
    let rgba = image::open(path)
        .with_context(|| format!("Failed to decode page image {}", path.display()))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

pub fn decode_pages(resources: &PageResources) -> Vec<(PageIndex, Handle)> {
    let started = Instant::now();
    let mut decoded = Vec::with_capacity(resources.page_count() as usize);
    for page in resources.pages() {
        let uri = resources.uri(page);
        match decode_page(Path::new(&uri)) {
            Ok(handle) => {
                debug!(%page, %uri, "Preloaded page");
                decoded.push((page, handle));
            }
            Err(err) => warn!(%page, "{err:#}"),
        }
    }
    info!(
        loaded = decoded.len(),
        total = resources.page_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Finished preloading pages"
    );
    decoded
}
