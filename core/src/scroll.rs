/// Viewport geometry sampled at event time. Never cached across events;
/// every scroll or resize handler re-queries and rebuilds one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ScrollMetrics {
    /// Normalized [0,1] progress through the whole document.
    pub fn document_progress(&self) -> f64 {
        region_progress(self.offset, 0.0, self.content_height - self.viewport_height)
    }
}

/// Progress of `offset` through `[region_start, region_end]`, clamped to
/// [0,1]. A zero or inverted extent yields 0 rather than dividing by zero.
pub fn region_progress(offset: f64, region_start: f64, region_end: f64) -> f64 {
    let extent = region_end - region_start;
    if extent <= 0.0 {
        return 0.0;
    }
    ((offset - region_start) / extent).clamp(0.0, 1.0)
}

/// Maps continuous progress onto one of `stages` equal-width buckets.
/// The clamp keeps the result at `stages - 1` once progress saturates at 1.
pub fn stage_index(progress: f64, stages: usize) -> usize {
    if stages == 0 {
        return 0;
    }
    let progress = progress.clamp(0.0, 1.0);
    ((progress * stages as f64) as usize).min(stages - 1)
}
