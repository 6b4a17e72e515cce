mod core;
mod navigation;
mod pointer;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    PreloadPages,
    Quit,
}
