//! Scroll-driven section visibility tracking.
//!
//! The content column is a vertical run of named sections, each occupying a
//! line range. As the user scrolls, the [`SectionObserver`] watches which
//! regions overlap an observation band cut from the viewport and reports
//! batches of visibility *changes*; [`reduce_active`] folds a batch into the
//! active-section state.
//!
//! The observation band is asymmetric on purpose: it trims 20% off the top
//! of the viewport and 50% off the bottom, which biases activation toward
//! sections entering from the top during a downward scroll rather than ones
//! barely peeking in at the bottom.

/// Identifier of a trackable content section.
pub type SectionId = &'static str;

/// Tuning for the section observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Minimum fraction of a region's extent that must lie inside the
    /// observation band for the region to count as intersecting.
    pub threshold: f32,
    /// Fraction of the viewport height trimmed from the top of the band.
    pub top_margin: f32,
    /// Fraction of the viewport height trimmed from the bottom of the band.
    pub bottom_margin: f32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.30,
            top_margin: 0.20,
            bottom_margin: 0.50,
        }
    }
}

/// A section's line extent in content-column coordinates.
///
/// `start` is the first line of the region and `len` its height in lines;
/// both refer to the pre-wrapped content, not screen rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Section identifier
    pub id: SectionId,
    /// First content line of the region
    pub start: usize,
    /// Height of the region in content lines
    pub len: usize,
}

impl Region {
    /// One past the last content line of the region.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }
}

/// The visible slice of the content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Height of the content pane in rows
    pub height: usize,
    /// Scroll offset: content line shown at the top of the pane
    pub scroll: usize,
}

impl Viewport {
    /// The observation band in content-line coordinates, as `(top, bottom)`.
    fn band(&self, config: &ObserverConfig) -> (f32, f32) {
        let height = self.height as f32;
        let top = self.scroll as f32 + height * config.top_margin;
        let bottom = self.scroll as f32 + height * (1.0 - config.bottom_margin);
        (top, bottom)
    }
}

/// A single visibility-change report for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Section the entry refers to
    pub id: SectionId,
    /// Fraction of the region's extent inside the observation band
    pub ratio: f32,
    /// Whether the ratio meets the configured threshold
    pub is_intersecting: bool,
}

/// Folds a batch of visibility changes into the active-section state.
///
/// Policy: first-match-wins within the batch - the first entry reporting
/// "currently intersecting" becomes active. A batch with no intersecting
/// entry leaves the previous state untouched (last-known-good), so the
/// result is always a member of the registered id set.
#[must_use]
pub fn reduce_active(prev: SectionId, batch: &[IntersectionEntry]) -> SectionId {
    batch
        .iter()
        .find(|entry| entry.is_intersecting)
        .map_or(prev, |entry| entry.id)
}

/// Observes a fixed set of section regions against a scrolling viewport.
///
/// Regions are registered once at mount via [`observe`](Self::observe) and
/// deregistered together by [`disconnect`](Self::disconnect) at teardown;
/// the set never changes in between, though extents may be updated on
/// reflow. Each [`observe_viewport`](Self::observe_viewport) call reports
/// only the regions whose intersecting state flipped since the previous
/// call, in registration order.
#[derive(Debug)]
pub struct SectionObserver {
    config: ObserverConfig,
    regions: Vec<Region>,
    intersecting: Vec<bool>,
    connected: bool,
}

impl SectionObserver {
    /// Creates an observer with the given configuration.
    #[must_use]
    pub const fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            regions: Vec::new(),
            intersecting: Vec::new(),
            connected: true,
        }
    }

    /// Registers a region. Called once per section at mount.
    pub fn observe(&mut self, region: Region) {
        if !self.connected {
            return;
        }
        debug_assert!(
            !self.regions.iter().any(|r| r.id == region.id),
            "region registered twice: {}",
            region.id
        );
        self.regions.push(region);
        self.intersecting.push(false);
    }

    /// Number of currently registered regions.
    #[must_use]
    pub fn registered(&self) -> usize {
        self.regions.len()
    }

    /// Whether the observer still holds registrations.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Registered section ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.regions.iter().map(|region| region.id)
    }

    /// Replaces region extents after a reflow.
    ///
    /// Matches by id; the region set itself is fixed at mount, so extents
    /// without a registered counterpart are ignored.
    pub fn update_extents(&mut self, extents: &[Region]) {
        for region in &mut self.regions {
            if let Some(updated) = extents.iter().find(|e| e.id == region.id) {
                region.start = updated.start;
                region.len = updated.len;
            }
        }
    }

    /// Observes the viewport and returns the batch of visibility changes.
    ///
    /// Entries appear in registration order and only for regions whose
    /// intersecting state differs from the last observation. A disconnected
    /// observer always returns an empty batch.
    pub fn observe_viewport(&mut self, viewport: Viewport) -> Vec<IntersectionEntry> {
        if !self.connected {
            return Vec::new();
        }

        let (band_top, band_bottom) = viewport.band(&self.config);
        let mut batch = Vec::new();

        for (region, state) in self.regions.iter().zip(self.intersecting.iter_mut()) {
            let ratio = visible_fraction(region, band_top, band_bottom);
            let now = ratio >= self.config.threshold;
            if now != *state {
                *state = now;
                batch.push(IntersectionEntry {
                    id: region.id,
                    ratio,
                    is_intersecting: now,
                });
            }
        }

        batch
    }

    /// Deregisters every region.
    ///
    /// After disconnecting, the observer reports nothing and ignores further
    /// registrations; the tracked state can no longer change.
    pub fn disconnect(&mut self) {
        self.regions.clear();
        self.intersecting.clear();
        self.connected = false;
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Fraction of `region`'s extent that lies inside the band.
fn visible_fraction(region: &Region, band_top: f32, band_bottom: f32) -> f32 {
    if region.len == 0 {
        return 0.0;
    }
    let start = region.start as f32;
    let end = region.end() as f32;
    let overlap = (end.min(band_bottom) - start.max(band_top)).max(0.0);
    overlap / (end - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: SectionId, ratio: f32, is_intersecting: bool) -> IntersectionEntry {
        IntersectionEntry {
            id,
            ratio,
            is_intersecting,
        }
    }

    #[test]
    fn test_default_config() {
        let config = ObserverConfig::default();
        assert!((config.threshold - 0.30).abs() < f32::EPSILON);
        assert!((config.top_margin - 0.20).abs() < f32::EPSILON);
        assert!((config.bottom_margin - 0.50).abs() < f32::EPSILON);
    }

    #[test]
    fn test_reduce_first_match_wins() {
        let batch = [
            entry("about", 0.1, false),
            entry("experience", 0.5, true),
            entry("projects", 0.9, true),
        ];
        assert_eq!(reduce_active("about", &batch), "experience");
    }

    #[test]
    fn test_reduce_retains_previous_on_empty_batch() {
        assert_eq!(reduce_active("projects", &[]), "projects");
    }

    #[test]
    fn test_reduce_retains_previous_when_nothing_intersects() {
        let batch = [entry("about", 0.05, false), entry("skills", 0.0, false)];
        assert_eq!(reduce_active("projects", &batch), "projects");
    }

    #[test]
    fn test_observe_reports_entering_region_once() {
        let mut observer = SectionObserver::new(ObserverConfig::default());
        observer.observe(Region {
            id: "about",
            start: 0,
            len: 10,
        });

        // Band for height 20, scroll 0: lines 4..10. Overlap 6/10 = 0.6.
        let viewport = Viewport {
            height: 20,
            scroll: 0,
        };
        let batch = observer.observe_viewport(viewport);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id, "about");
        assert!(batch[0].is_intersecting);
        assert!(batch[0].ratio > 0.30);

        // Same geometry again: no state change, empty batch.
        assert!(observer.observe_viewport(viewport).is_empty());
    }

    #[test]
    fn test_observe_reports_leaving_region() {
        let mut observer = SectionObserver::new(ObserverConfig::default());
        observer.observe(Region {
            id: "about",
            start: 0,
            len: 10,
        });

        observer.observe_viewport(Viewport {
            height: 20,
            scroll: 0,
        });
        // Scroll far past the region: it leaves the band.
        let batch = observer.observe_viewport(Viewport {
            height: 20,
            scroll: 50,
        });
        assert_eq!(batch.len(), 1);
        assert!(!batch[0].is_intersecting);
    }

    #[test]
    fn test_batch_preserves_registration_order() {
        let mut observer = SectionObserver::new(ObserverConfig::default());
        observer.observe(Region {
            id: "about",
            start: 0,
            len: 5,
        });
        observer.observe(Region {
            id: "experience",
            start: 5,
            len: 5,
        });

        // Band 4..10 covers the tail of "about" (1/5 = 0.2, below threshold)
        // and all of "experience" (5/5 = 1.0).
        let batch = observer.observe_viewport(Viewport {
            height: 20,
            scroll: 0,
        });
        let ids: Vec<_> = batch.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["experience"]);
    }

    #[test]
    fn test_disconnect_clears_registrations() {
        let mut observer = SectionObserver::new(ObserverConfig::default());
        observer.observe(Region {
            id: "about",
            start: 0,
            len: 10,
        });
        assert_eq!(observer.registered(), 1);

        observer.disconnect();
        assert_eq!(observer.registered(), 0);
        assert!(!observer.is_connected());
        assert!(observer
            .observe_viewport(Viewport {
                height: 20,
                scroll: 0,
            })
            .is_empty());

        // Registrations after disconnect are ignored.
        observer.observe(Region {
            id: "about",
            start: 0,
            len: 10,
        });
        assert_eq!(observer.registered(), 0);
    }

    #[test]
    fn test_update_extents_keeps_id_set() {
        let mut observer = SectionObserver::new(ObserverConfig::default());
        observer.observe(Region {
            id: "about",
            start: 0,
            len: 10,
        });
        observer.observe(Region {
            id: "experience",
            start: 10,
            len: 8,
        });

        observer.update_extents(&[
            Region {
                id: "about",
                start: 0,
                len: 14,
            },
            Region {
                id: "experience",
                start: 14,
                len: 12,
            },
            Region {
                id: "bogus",
                start: 26,
                len: 4,
            },
        ]);

        let ids: Vec<_> = observer.ids().collect();
        assert_eq!(ids, vec!["about", "experience"]);
    }

    #[test]
    fn test_visible_fraction_zero_len_region() {
        let region = Region {
            id: "about",
            start: 0,
            len: 0,
        };
        assert!((visible_fraction(&region, 0.0, 10.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_visible_fraction_partial_overlap() {
        let region = Region {
            id: "about",
            start: 0,
            len: 10,
        };
        // Band 5..20: overlap is 5 of 10 lines.
        let ratio = visible_fraction(&region, 5.0, 20.0);
        assert!((ratio - 0.5).abs() < 1e-6);
    }
}
