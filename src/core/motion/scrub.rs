//! Pin-and-scrub geometry for the horizontal carousel.
//!
//! While the section is pinned, vertical scroll progress drives the track's
//! horizontal translation. The pinned length equals the track's scroll width.

/// Viewports at least this wide get the pinned horizontal carousel
pub const WIDE_VIEWPORT_MIN: f64 = 1024.0;

/// Catch-up time for the scrubbed transform, in seconds
pub const SCRUB_SMOOTHING: f64 = 1.0;

pub fn is_wide(viewport_width: f64) -> bool {
    viewport_width >= WIDE_VIEWPORT_MIN
}

/// Measured layout, captured at setup and on explicit invalidation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinScrub {
    pub track_width: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl PinScrub {
    pub fn new(track_width: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            track_width: track_width.max(0.0),
            viewport_width: viewport_width.max(0.0),
            viewport_height: viewport_height.max(0.0),
        }
    }

    /// How far the track must travel to bring its last card into view
    pub fn distance(&self) -> f64 {
        (self.track_width - self.viewport_width).max(0.0)
    }

    /// Height the section needs so it stays pinned for the scroll length
    pub fn pinned_height(&self) -> f64 {
        self.viewport_height + self.track_width
    }

    /// Scroll progress through the pin, from the section's viewport top
    pub fn progress(&self, section_top: f64) -> f64 {
        if self.track_width <= 0.0 {
            return 0.0;
        }
        (-section_top / self.track_width).clamp(0.0, 1.0)
    }

    /// Horizontal offset of the track at `progress`
    pub fn offset(&self, progress: f64) -> f64 {
        -self.distance() * progress.clamp(0.0, 1.0)
    }

    /// Offset for the current section position
    pub fn offset_at(&self, section_top: f64) -> f64 {
        self.offset(self.progress(section_top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_breakpoint() {
        assert!(!is_wide(1023.0));
        assert!(is_wide(1024.0));
        assert!(is_wide(1920.0));
    }

    #[test]
    fn test_distance_is_overflow() {
        let scrub = PinScrub::new(3000.0, 1280.0, 800.0);
        assert_eq!(scrub.distance(), 1720.0);
        assert_eq!(scrub.pinned_height(), 3800.0);

        // Track narrower than the viewport never moves
        let short = PinScrub::new(900.0, 1280.0, 800.0);
        assert_eq!(short.distance(), 0.0);
        assert_eq!(short.offset(1.0), 0.0);
    }

    #[test]
    fn test_progress_tracks_scroll() {
        let scrub = PinScrub::new(2000.0, 1000.0, 800.0);
        assert_eq!(scrub.progress(100.0), 0.0);
        assert_eq!(scrub.progress(0.0), 0.0);
        assert_eq!(scrub.progress(-1000.0), 0.5);
        assert_eq!(scrub.progress(-5000.0), 1.0);
    }

    #[test]
    fn test_offset_follows_progress() {
        let scrub = PinScrub::new(2000.0, 1000.0, 800.0);
        assert_eq!(scrub.offset_at(-1000.0), -500.0);
        assert_eq!(scrub.offset_at(-2000.0), -1000.0);
        assert_eq!(scrub.offset_at(400.0), 0.0);
    }

    #[test]
    fn test_unmeasured_track_is_inert() {
        let scrub = PinScrub::default();
        assert_eq!(scrub.progress(-300.0), 0.0);
        assert_eq!(scrub.offset_at(-300.0), 0.0);
    }
}
