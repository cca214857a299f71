//! # Scroll Direction Tracking
//!
//! Turns the page's raw scroll offset into the header's show/hide signal.
//!
//! ```text
//! scroll events ──publish──▶ ScrollBus ──(latest sample per frame)──▶ ScrollDirectionTracker
//!                                                                       │
//!                                                                       ▼
//!                                                          ScrollState { scroll_y, direction, visible }
//! ```
//!
//! ## Frame Coalescing
//!
//! Every subscriber owns one pending slot on the bus. Publishing overwrites
//! the slot, so however many raw events arrive between two frames, the
//! tracker evaluates exactly one sample (the newest) per `on_frame()` call.
//!
//! ## Hysteresis
//!
//! The tracker remembers the offset of the last *significant* sample (the
//! baseline). Motion smaller than `threshold` relative to that baseline is
//! ignored, so jitter near a resting position never flickers the header.
//! Anywhere above the page top (`scroll_y < threshold`) the header is
//! always shown.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Minimum delta (and near-top distance) used when nothing is configured.
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 10;
/// Offset past which the header switches to its elevated style.
pub const DEFAULT_ELEVATE_AFTER: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

/// Render state derived from the scroll stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    /// Last accepted vertical offset.
    pub scroll_y: u32,
    /// Sign of the most recent significant delta.
    pub direction: Direction,
    /// Whether the header should be drawn in its shown position.
    pub visible: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scroll_y: 0,
            direction: Direction::Up,
            visible: true,
        }
    }
}

/// What the header actually needs to draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    pub direction: Direction,
    pub visible: bool,
    pub scroll_y: u32,
    /// Past the fold: the header gets its shadowed, condensed style.
    pub elevated: bool,
}

#[derive(Default)]
struct BusSlots {
    next_id: u64,
    pending: HashMap<u64, Option<u32>>,
}

/// Source of raw scroll offsets.
///
/// The page publishes into the bus, views subscribe to it. Cloning the bus
/// hands out another publisher for the same set of subscribers.
#[derive(Clone, Default)]
pub struct ScrollBus {
    slots: Rc<RefCell<BusSlots>>,
}

impl ScrollBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw scroll offset for every live subscriber.
    /// Samples not yet consumed are overwritten.
    pub fn publish(&self, offset: u32) {
        for slot in self.slots.borrow_mut().pending.values_mut() {
            *slot = Some(offset);
        }
    }

    /// Acquire a subscription. It is released when dropped.
    pub fn subscribe(&self) -> ScrollSubscription {
        let mut slots = self.slots.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        slots.pending.insert(id, None);
        ScrollSubscription {
            slots: Rc::downgrade(&self.slots),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.borrow().pending.len()
    }
}

/// An owned handle on a [`ScrollBus`] slot.
pub struct ScrollSubscription {
    slots: Weak<RefCell<BusSlots>>,
    id: u64,
}

impl ScrollSubscription {
    /// Take the newest sample published since the previous call, if any.
    pub fn take_latest(&self) -> Option<u32> {
        let slots = self.slots.upgrade()?;
        let mut slots = slots.borrow_mut();
        slots.pending.get_mut(&self.id).and_then(Option::take)
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().pending.remove(&self.id);
        }
    }
}

/// Derives [`ScrollState`] from a scroll subscription.
///
/// Mounted by the view that renders the header; dropping the tracker drops
/// its subscription.
pub struct ScrollDirectionTracker {
    threshold: u32,
    baseline: u32,
    state: ScrollState,
    subscription: ScrollSubscription,
}

impl ScrollDirectionTracker {
    /// Subscribe to `bus`. A zero threshold is treated as 1.
    pub fn mount(bus: &ScrollBus, threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            baseline: 0,
            state: ScrollState::default(),
            subscription: bus.subscribe(),
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn header_state(&self, elevate_after: u32) -> HeaderState {
        HeaderState {
            direction: self.state.direction,
            visible: self.state.visible,
            scroll_y: self.state.scroll_y,
            elevated: self.state.scroll_y > elevate_after,
        }
    }

    /// Evaluate at most one pending sample. Call once per rendered frame.
    ///
    /// Returns `true` if the state changed.
    pub fn on_frame(&mut self) -> bool {
        match self.subscription.take_latest() {
            Some(offset) => self.sample(offset),
            None => false,
        }
    }

    /// Apply one scroll sample. Returns `true` if the state changed.
    pub fn sample(&mut self, offset: u32) -> bool {
        let before = self.state;
        self.state.scroll_y = offset;

        if offset < self.threshold {
            self.state.visible = true;
            self.state.direction = Direction::Up;
            self.baseline = offset;
        } else if offset.abs_diff(self.baseline) >= self.threshold {
            self.state.direction = if offset > self.baseline {
                Direction::Down
            } else {
                Direction::Up
            };
            self.state.visible = self.state.direction == Direction::Up;
            self.baseline = offset;
        }

        self.state != before
    }
}
