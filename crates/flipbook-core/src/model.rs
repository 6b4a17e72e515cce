//! Page and spread model.
//!
//! A book of `N` pages (even, at least 2) is shown as `N / 2 + 1` states:
//! a single-page front cover, two-page spreads with the even page on the left,
//! and a single-page back cover.

use crate::error::{BookError, Result};
use serde::Serialize;
use std::fmt;
use std::num::NonZeroU32;

/// One-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageIndex(NonZeroU32);

impl PageIndex {
    pub const FIRST: PageIndex = PageIndex(NonZeroU32::MIN);

    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(PageIndex)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    fn from_ordinal(page: u32) -> Self {
        PageIndex(NonZeroU32::MIN.saturating_add(page.saturating_sub(1)))
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the book shows one page or two side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Single,
    Spread,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LayoutMode::Single => "single",
            LayoutMode::Spread => "spread",
        };
        write!(f, "{}", label)
    }
}

/// What the two static slots show for one book state.
///
/// Covers leave the left slot empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spread {
    pub left: Option<PageIndex>,
    pub right: PageIndex,
}

impl Spread {
    pub fn layout(&self) -> LayoutMode {
        if self.left.is_some() {
            LayoutMode::Spread
        } else {
            LayoutMode::Single
        }
    }
}

fn validate_page_count(page_count: u32) -> Result<()> {
    if page_count < 2 || page_count % 2 != 0 {
        return Err(BookError::InvalidPageCount(page_count));
    }
    Ok(())
}

/// Build the ordered state table for a book of `page_count` pages.
pub fn build_states(page_count: u32) -> Result<Vec<Spread>> {
    validate_page_count(page_count)?;

    let mut states = Vec::with_capacity(page_count as usize / 2 + 1);
    states.push(Spread {
        left: None,
        right: PageIndex::FIRST,
    });
    for left in (2..page_count).step_by(2) {
        states.push(Spread {
            left: Some(PageIndex::from_ordinal(left)),
            right: PageIndex::from_ordinal(left + 1),
        });
    }
    states.push(Spread {
        left: None,
        right: PageIndex::from_ordinal(page_count),
    });
    Ok(states)
}

/// Maps page numbers to image locations.
///
/// Page 1 uses the bare stem (`imgs/arizonaserif.png`); every later page
/// appends its number (`imgs/arizonaserif12.png`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResources {
    dir: String,
    stem: String,
    extension: String,
    page_count: u32,
}

impl PageResources {
    pub fn new(
        dir: impl Into<String>,
        stem: impl Into<String>,
        extension: impl Into<String>,
        page_count: u32,
    ) -> Result<Self> {
        validate_page_count(page_count)?;
        Ok(Self {
            dir: dir.into(),
            stem: stem.into(),
            extension: extension.into(),
            page_count,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Resource path for `page`.
    ///
    /// # Panics
    ///
    /// Panics if `page` is beyond the book's page count.
    pub fn uri(&self, page: PageIndex) -> String {
        assert!(
            page.get() <= self.page_count,
            "page {page} is outside a {}-page book",
            self.page_count
        );
        let suffix = if page == PageIndex::FIRST {
            String::new()
        } else {
            page.to_string()
        };
        let extension = self.extension.trim_start_matches('.');
        let dir = self.dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{}{suffix}.{extension}", self.stem)
        } else {
            format!("{dir}/{}{suffix}.{extension}", self.stem)
        }
    }

    pub fn pages(&self) -> impl Iterator<Item = PageIndex> + '_ {
        (1..=self.page_count).map(PageIndex::from_ordinal)
    }
}
