//! # Showcase View State
//!
//! Which vehicle group is active, which of its items is selected, and
//! whether playback is requested.
//!
//! Two signal sources drive it:
//!
//! - **Region intersection**: each group owns an anchor region on the page.
//!   When the set of regions that are at least half visible changes, the
//!   first in-view group (catalog order) becomes active.
//! - **Clicks**: selecting a group or a control directly.
//!
//! Invariants:
//!
//! - A group change always resets the index to 0.
//! - Selecting a control always requests playback.
//! - Reads clamp an out-of-range index to 0 instead of failing.

use crate::core::catalog::{Group, GroupCatalog, MediaItem};

/// Fraction of a region that must be visible for it to count as in view.
pub const DEFAULT_REGION_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub active_group: Group,
    pub active_index: usize,
    pub is_playing: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Group::Passenger)
    }
}

impl ViewState {
    pub fn new(initial: Group) -> Self {
        Self {
            active_group: initial,
            active_index: 0,
            is_playing: true,
        }
    }

    pub fn select_control(&mut self, index: usize) {
        self.active_index = index;
        self.is_playing = true;
    }

    pub fn select_group(&mut self, group: Group) {
        self.active_group = group;
        self.active_index = 0;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Apply a fresh set of region in-view flags.
    ///
    /// Returns `true` if a region claimed the view. When nothing is in view
    /// the previous state holds.
    pub fn observe_regions(&mut self, in_view: &[(Group, bool)]) -> bool {
        if !in_view.iter().any(|&(_, visible)| visible) {
            return false;
        }
        let group = resolve_active_group(in_view, self.active_group);
        self.select_group(group);
        true
    }

    pub fn current_items<'a>(&self, catalog: &'a GroupCatalog) -> &'a [MediaItem] {
        catalog.items(self.active_group)
    }

    /// The active index, clamped to 0 when it doesn't fit the catalog.
    pub fn resolved_index(&self, catalog: &GroupCatalog) -> usize {
        if self.active_index < self.current_items(catalog).len() {
            self.active_index
        } else {
            0
        }
    }

    pub fn current_item<'a>(&self, catalog: &'a GroupCatalog) -> Option<&'a MediaItem> {
        self.current_items(catalog).get(self.resolved_index(catalog))
    }

    /// Everything a renderer needs, with the index already clamped.
    pub fn view<'a>(&self, catalog: &'a GroupCatalog) -> ShowcaseView<'a> {
        ShowcaseView {
            active_group: self.active_group,
            active_index: self.resolved_index(catalog),
            is_playing: self.is_playing,
            items: self.current_items(catalog),
            current_item: self.current_item(catalog),
        }
    }
}

/// Read-only snapshot of the showcase for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseView<'a> {
    pub active_group: Group,
    pub active_index: usize,
    pub is_playing: bool,
    /// The control strip, one entry per item.
    pub items: &'a [MediaItem],
    pub current_item: Option<&'a MediaItem>,
}

/// Pick the group whose region claims the view.
///
/// `in_view` lists `(group, is_in_view)` pairs in precedence order; the first
/// group in view wins, so simultaneous visibility resolves to the earlier
/// group. With nothing in view, `last` is kept.
pub fn resolve_active_group(in_view: &[(Group, bool)], last: Group) -> Group {
    in_view
        .iter()
        .find(|&&(_, visible)| visible)
        .map(|&(group, _)| group)
        .unwrap_or(last)
}

/// A vertical span of the page, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpan {
    pub top: u32,
    pub height: u32,
}

impl RegionSpan {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// Fraction of `region` that lies inside `viewport`, in `[0, 1]`.
pub fn visible_fraction(region: RegionSpan, viewport: RegionSpan) -> f32 {
    if region.height == 0 {
        return 0.0;
    }
    let top = region.top.max(viewport.top);
    let bottom = region.bottom().min(viewport.bottom());
    let overlap = bottom.saturating_sub(top);
    overlap as f32 / region.height as f32
}

/// Watches a set of regions and reports when their in-view flags change.
///
/// Like a browser intersection observer, it only fires on crossings: the
/// first observation always reports, later ones only when a flag flipped.
/// Regions moving around (a resize) report nothing unless a flag flips; a
/// different set of regions compares unequal and reports afresh.
pub struct RegionObserver {
    threshold: f32,
    last: Option<Vec<(Group, bool)>>,
}

impl RegionObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            last: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn observe(
        &mut self,
        regions: &[(Group, RegionSpan)],
        viewport: RegionSpan,
    ) -> Option<Vec<(Group, bool)>> {
        let flags: Vec<(Group, bool)> = regions
            .iter()
            .map(|&(group, span)| (group, visible_fraction(span, viewport) >= self.threshold))
            .collect();

        if self.last.as_ref() == Some(&flags) {
            return None;
        }
        self.last = Some(flags.clone());
        Some(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let view = ViewState::default();
        assert_eq!(view.active_group, Group::Passenger);
        assert_eq!(view.active_index, 0);
        assert!(view.is_playing);
    }

    #[test]
    fn test_select_control_starts_playback() {
        let catalog = GroupCatalog::builtin();
        let mut view = ViewState::default();
        view.toggle_play();
        assert!(!view.is_playing);

        view.select_control(3);
        assert!(view.is_playing);
        assert_eq!(view.current_item(&catalog).unwrap().label, "Trunk");
    }

    #[test]
    fn test_group_switch_resets_index_keeps_playback_flag() {
        let mut view = ViewState::default();
        view.select_control(4);
        view.toggle_play();

        view.select_group(Group::Commercial);
        assert_eq!(view.active_index, 0);
        assert!(!view.is_playing, "group selection must not force playback");
    }

    #[test]
    fn test_out_of_range_index_clamps_to_zero() {
        let catalog = GroupCatalog::builtin();
        let view = ViewState {
            active_group: Group::Commercial,
            active_index: 4,
            is_playing: true,
        };
        assert_eq!(view.resolved_index(&catalog), 0);
        assert_eq!(view.current_item(&catalog).unwrap().label, "Complete body");

        let snapshot = view.view(&catalog);
        assert_eq!(snapshot.active_index, 0);
        assert_eq!(snapshot.items.len(), 3);
        assert_eq!(snapshot.current_item.map(|i| i.id), Some(1));
    }

    #[test]
    fn test_resolve_prefers_first_in_view() {
        let both = [(Group::Passenger, true), (Group::Commercial, true)];
        assert_eq!(resolve_active_group(&both, Group::Commercial), Group::Passenger);

        let commercial = [(Group::Passenger, false), (Group::Commercial, true)];
        assert_eq!(resolve_active_group(&commercial, Group::Passenger), Group::Commercial);

        let none = [(Group::Passenger, false), (Group::Commercial, false)];
        assert_eq!(resolve_active_group(&none, Group::Commercial), Group::Commercial);
    }

    #[test]
    fn test_observe_regions_resets_index_even_for_same_group() {
        let mut view = ViewState::default();
        view.select_control(2);
        assert!(view.observe_regions(&[(Group::Passenger, true), (Group::Commercial, false)]));
        assert_eq!(view.active_group, Group::Passenger);
        assert_eq!(view.active_index, 0);
    }

    #[test]
    fn test_observe_regions_nothing_in_view_holds() {
        let mut view = ViewState::default();
        view.select_group(Group::Commercial);
        view.select_control(1);
        assert!(!view.observe_regions(&[(Group::Passenger, false), (Group::Commercial, false)]));
        assert_eq!(view.active_group, Group::Commercial);
        assert_eq!(view.active_index, 1);
    }

    #[test]
    fn test_visible_fraction() {
        let viewport = RegionSpan::new(100, 40);
        assert_eq!(visible_fraction(RegionSpan::new(100, 40), viewport), 1.0);
        assert_eq!(visible_fraction(RegionSpan::new(120, 40), viewport), 0.5);
        assert_eq!(visible_fraction(RegionSpan::new(200, 40), viewport), 0.0);
        assert_eq!(visible_fraction(RegionSpan::new(0, 0), viewport), 0.0);
    }

    #[test]
    fn test_observer_fires_only_on_crossings() {
        let regions = [
            (Group::Passenger, RegionSpan::new(100, 40)),
            (Group::Commercial, RegionSpan::new(140, 40)),
        ];
        let mut observer = RegionObserver::new(DEFAULT_REGION_THRESHOLD);

        // First observation always reports.
        let first = observer.observe(&regions, RegionSpan::new(0, 40)).unwrap();
        assert_eq!(first, vec![(Group::Passenger, false), (Group::Commercial, false)]);

        // Still nothing in view: silent.
        assert!(observer.observe(&regions, RegionSpan::new(10, 40)).is_none());

        // Passenger crosses 50%.
        let entered = observer.observe(&regions, RegionSpan::new(80, 40)).unwrap();
        assert_eq!(entered, vec![(Group::Passenger, true), (Group::Commercial, false)]);

        // Commercial takes over.
        let swapped = observer.observe(&regions, RegionSpan::new(125, 40)).unwrap();
        assert_eq!(swapped, vec![(Group::Passenger, false), (Group::Commercial, true)]);
    }

    #[test]
    fn test_observer_silent_when_regions_move_without_crossing() {
        let mut observer = RegionObserver::new(DEFAULT_REGION_THRESHOLD);
        let before = vec![
            (Group::Passenger, RegionSpan::new(100, 40)),
            (Group::Commercial, RegionSpan::new(140, 40)),
        ];
        observer.observe(&before, RegionSpan::new(100, 40)).unwrap();

        // Regions shift a little after a resize; passenger stays mostly in view
        let after = vec![
            (Group::Passenger, RegionSpan::new(104, 40)),
            (Group::Commercial, RegionSpan::new(144, 40)),
        ];
        assert!(observer.observe(&after, RegionSpan::new(100, 40)).is_none());

        // Narrow layout has no regions: that is a new set and reports
        assert_eq!(observer.observe(&[], RegionSpan::new(100, 40)), Some(Vec::new()));
        assert!(observer.observe(&after, RegionSpan::new(100, 40)).is_some());
    }
}
