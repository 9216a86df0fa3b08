//! Engine-facing types shared with the input adapters.

/// Whether the frame buffer reflects the current view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// The view changed since the last completed frame; the next render
    /// tick must recompute every pixel.
    Calculating,
    /// The frame buffer is up to date and can be presented as is.
    Displaying,
}

/// How a render pass distributes per-pixel work.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// Row-major loop on the calling thread.
    Serial,
    /// Rows spread across rayon's global pool.
    #[default]
    ParallelRayon,
}
