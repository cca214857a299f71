//! # Page Layout and Scrolling
//!
//! The landing page is one tall document rendered into a `ScrollView`.
//! `PageLayout` decides where each section sits in content coordinates,
//! `PageState` owns the scroll offset and publishes it to the scroll bus
//! so the header's tracker can pick it up on the next frame.
//!
//! ```text
//! ┌──────────────┐ 0
//! │ Hero         │ one viewport tall
//! ├──────────────┤
//! │ Contact      │
//! ├──────────────┤
//! │ Heading      │
//! ├──────────────┤
//! │ Stage        │ one viewport per group; the showcase panel
//! │  (regions)   │ sticks to the top of the viewport inside it
//! ├──────────────┤
//! │ Footer       │
//! └──────────────┘ total_height
//! ```

use ratatui::layout::{Position, Rect};
use tui_scrollview::ScrollViewState;

use crate::core::catalog::{Group, GroupCatalog};
use crate::core::scroll::ScrollBus;
use crate::core::showcase::RegionSpan;
use crate::tui::component::EventHandler;
use crate::tui::components::{carousel, contact_section, footer, showcase};
use crate::tui::event::TuiEvent;

/// Rows moved per arrow key or wheel notch.
pub const SCROLL_STEP: u16 = 3;
const MIN_HERO_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBlock {
    Hero,
    Contact,
    ShowcaseHeading,
    /// Desktop showcase: tall scroll stage holding the sticky panel.
    Stage,
    /// Narrow screens: one carousel per group.
    MobileShowcase,
    Footer,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub blocks: Vec<(PageBlock, Rect)>,
    /// Anchor region per group, in catalog order. Empty on narrow screens.
    pub regions: Vec<(Group, RegionSpan)>,
    /// One carousel per group, in catalog order. Empty on wide screens.
    pub carousels: Vec<(Group, Rect)>,
    pub total_height: u16,
    pub viewport_height: u16,
    pub mobile: bool,
}

impl PageLayout {
    pub fn compute(width: u16, viewport_height: u16, mobile: bool, catalog: &GroupCatalog) -> Self {
        let groups: Vec<Group> = catalog.groups().collect();
        let hero_height = viewport_height.max(MIN_HERO_HEIGHT);
        let region_height = viewport_height.max(showcase::MIN_PANEL_HEIGHT);

        let mut sections = vec![
            (PageBlock::Hero, hero_height),
            (PageBlock::Contact, contact_section::required_height(mobile)),
            (PageBlock::ShowcaseHeading, showcase::HEADING_HEIGHT),
        ];
        if mobile {
            sections.push((
                PageBlock::MobileShowcase,
                carousel::CAROUSEL_HEIGHT.saturating_mul(groups.len() as u16),
            ));
        } else {
            sections.push((
                PageBlock::Stage,
                region_height.saturating_mul(groups.len() as u16),
            ));
        }
        sections.push((PageBlock::Footer, footer::FOOTER_HEIGHT));

        let mut blocks = Vec::with_capacity(sections.len());
        let mut y: u16 = 0;
        for (block, height) in sections {
            blocks.push((block, Rect::new(0, y, width, height)));
            y = y.saturating_add(height);
        }

        let regions = blocks
            .iter()
            .find(|(block, _)| *block == PageBlock::Stage)
            .map(|(_, stage)| {
                groups
                    .iter()
                    .enumerate()
                    .map(|(i, &group)| {
                        let top = u32::from(stage.y) + i as u32 * u32::from(region_height);
                        (group, RegionSpan::new(top, u32::from(region_height)))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let carousels = blocks
            .iter()
            .find(|(block, _)| *block == PageBlock::MobileShowcase)
            .map(|(_, area)| {
                groups
                    .iter()
                    .enumerate()
                    .map(|(i, &group)| {
                        let y = area.y + i as u16 * carousel::CAROUSEL_HEIGHT;
                        (group, Rect::new(area.x, y, area.width, carousel::CAROUSEL_HEIGHT))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            blocks,
            regions,
            carousels,
            total_height: y,
            viewport_height,
            mobile,
        }
    }

    /// The rows a group's region covers, as a rect.
    pub fn region_rect(&self, group: Group) -> Option<Rect> {
        let stage = self.block(PageBlock::Stage)?;
        self.regions
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, span)| Rect::new(stage.x, span.top as u16, stage.width, span.height as u16))
    }

    pub fn block(&self, which: PageBlock) -> Option<Rect> {
        self.blocks
            .iter()
            .find(|(block, _)| *block == which)
            .map(|(_, rect)| *rect)
    }

    /// Where the showcase panel sits for the given scroll offset: pinned to
    /// the viewport top while the stage is under it, clamped to the stage.
    pub fn sticky_panel(&self, offset: u16) -> Option<Rect> {
        let stage = self.block(PageBlock::Stage)?;
        let height = self
            .viewport_height
            .max(showcase::MIN_PANEL_HEIGHT)
            .min(stage.height);
        let max_y = stage.bottom().saturating_sub(height);
        let y = offset.clamp(stage.y, max_y.max(stage.y));
        Some(Rect::new(stage.x, y, stage.width, height))
    }
}

/// Scroll position of the page.
pub struct PageState {
    pub scroll_state: ScrollViewState,
    bus: ScrollBus,
    content_height: u16,
    viewport_height: u16,
}

impl PageState {
    pub fn new(bus: ScrollBus) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            bus,
            content_height: 0,
            viewport_height: 0,
        }
    }

    pub fn bus(&self) -> &ScrollBus {
        &self.bus
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    pub fn viewport(&self) -> RegionSpan {
        RegionSpan::new(u32::from(self.offset()), u32::from(self.viewport_height))
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Record the document and viewport size, re-clamping the offset.
    pub fn set_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        let clamped = self.offset().min(self.max_offset());
        if clamped != self.offset() {
            self.scroll_to(clamped);
        }
    }

    /// Move to `y` (clamped). Returns the new offset if it changed.
    pub fn scroll_to(&mut self, y: u16) -> Option<u16> {
        let target = y.min(self.max_offset());
        let before = self.scroll_state.offset();
        if before.y == target {
            return None;
        }
        self.scroll_state.set_offset(Position::new(before.x, target));
        self.bus.publish(u32::from(target));
        Some(target)
    }

    pub fn scroll_by(&mut self, delta: i32) -> Option<u16> {
        let target = (i32::from(self.offset()) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(target as u16)
    }

    /// Scroll the least amount needed to bring `rect` on screen.
    pub fn reveal(&mut self, rect: Rect) -> Option<u16> {
        let top = self.offset();
        let bottom = top.saturating_add(self.viewport_height);
        if rect.y < top || rect.height > self.viewport_height {
            self.scroll_to(rect.y)
        } else if rect.bottom() > bottom {
            self.scroll_to(rect.bottom().saturating_sub(self.viewport_height))
        } else {
            None
        }
    }

    fn page_step(&self) -> i32 {
        i32::from(self.viewport_height.saturating_sub(2).max(1))
    }
}

impl EventHandler for PageState {
    /// The new offset, when it moved.
    type Event = u16;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-i32::from(SCROLL_STEP)),
            TuiEvent::ScrollDown => self.scroll_by(i32::from(SCROLL_STEP)),
            TuiEvent::ScrollPageUp => self.scroll_by(-self.page_step()),
            TuiEvent::ScrollPageDown => self.scroll_by(self.page_step()),
            TuiEvent::ScrollToTop => self.scroll_to(0),
            TuiEvent::ScrollToBottom => self.scroll_to(self.max_offset()),
            _ => None,
        }
    }
}
