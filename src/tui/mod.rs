//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Frame Loop
//!
//! Every frame, in order:
//!
//! 1. the header's scroll tracker evaluates at most one pending scroll sample
//! 2. the page is drawn (which also recomputes the layout)
//! 3. the region observer compares the anchor regions against the viewport
//!    and reports crossings as `Action::RegionsObserved`
//! 4. input is polled for up to one frame interval, then drained
//! 5. results from background submissions are drained
//!
//! The clips are always animating, so the loop redraws at the configured
//! frame rate whenever something is playing and falls back to an idle poll
//! otherwise.

mod component;
mod components;
mod event;
mod page;
mod player;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::SubmitterKind;
use crate::core::action::{Action, Effect, update};
use crate::core::carousel::CarouselState;
use crate::core::catalog::{Group, GroupCatalog};
use crate::core::config::ResolvedConfig;
use crate::core::contact::{ContactFields, Field};
use crate::core::playback::{MediaPlayer, PlaybackBinding};
use crate::core::scroll::{ScrollBus, ScrollDirectionTracker};
use crate::core::showcase::RegionObserver;
use crate::core::state::App;
use crate::submission::{
    ContactSubmitter, LogSubmitter, OutboxSubmitter, submit_with_timeout,
};
use crate::tui::component::EventHandler;
use crate::tui::components::contact_form::{FormEditor, FormEvent, FormFocus};
use crate::tui::components::contact_section;
use crate::tui::components::header::NavLink;
use crate::tui::components::hero::HERO_CLIP;
use crate::tui::components::showcase::showcase_action;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::page::{PageBlock, PageLayout, PageState};
use crate::tui::player::ClipPlayer;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// What keyboard input currently goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Nothing in particular: arrows scroll, Esc quits.
    Page,
    Field(Field),
    Submit,
    /// The desktop showcase panel.
    Showcase,
    /// One of the narrow-screen carousels.
    Carousel(Group),
}

impl Focus {
    pub fn form_focus(self) -> Option<FormFocus> {
        match self {
            Focus::Field(field) => Some(FormFocus::Field(field)),
            Focus::Submit => Some(FormFocus::Submit),
            _ => None,
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Focus::Page => "↑↓ scroll · Tab focus · Esc quit ",
            Focus::Field(Field::Message) => "Enter newline · Tab next · Esc leave ",
            Focus::Field(_) => "Enter send · Tab next · Esc leave ",
            Focus::Submit => "Enter send · Tab next · Esc leave ",
            Focus::Showcase => "←→ clip · Space play/pause · p/c group ",
            Focus::Carousel(_) => "←→ slide · Tab next · Esc leave ",
        }
    }
}

/// Something clickable. Page targets are in content coordinates, header
/// nav links in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Nav(NavLink),
    Group(Group),
    Control(usize),
    PlayPause,
    Field(Field),
    Submit,
    CarouselPrev(Group),
    CarouselNext(Group),
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub page: PageState,
    pub layout: PageLayout,
    pub tracker: ScrollDirectionTracker,
    pub regions: RegionObserver,
    pub focus: Focus,
    pub editor: FormEditor,
    pub carousels: Vec<(Group, CarouselState)>,
    pub hero_player: ClipPlayer,
    pub showcase_player: PlaybackBinding<ClipPlayer>,
    // Filled in by each draw, read by hit testing
    pub hit_targets: Vec<(ratatui::layout::Rect, HitTarget)>,
    pub nav_targets: Vec<(ratatui::layout::Rect, NavLink)>,
    pub page_area: ratatui::layout::Rect,
    pub header_height: u16,
    // Settings
    pub elevate_after: u32,
    pub mobile_breakpoint: u16,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig, catalog: &GroupCatalog) -> Self {
        let page = PageState::new(ScrollBus::new());
        let tracker = ScrollDirectionTracker::mount(page.bus(), config.scroll_threshold);
        let carousels = catalog
            .groups()
            .map(|group| (group, CarouselState::new(catalog.items(group).len())))
            .collect();
        Self {
            page,
            layout: PageLayout::default(),
            tracker,
            regions: RegionObserver::new(config.region_threshold),
            focus: Focus::Page,
            editor: FormEditor::new(),
            carousels,
            hero_player: ClipPlayer::new(config.clip_length),
            showcase_player: PlaybackBinding::new(ClipPlayer::new(config.clip_length)),
            hit_targets: Vec::new(),
            nav_targets: Vec::new(),
            page_area: ratatui::layout::Rect::default(),
            header_height: 0,
            elevate_after: config.elevate_after,
            mobile_breakpoint: config.mobile_breakpoint,
        }
    }

    pub fn carousel_mut(&mut self, group: Group) -> Option<&mut CarouselState> {
        self.carousels
            .iter_mut()
            .find(|(g, _)| *g == group)
            .map(|(_, state)| state)
    }

    pub fn carousel(&self, group: Group) -> CarouselState {
        self.carousels
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, state)| *state)
            .unwrap_or_default()
    }

    /// Focus targets in page order for the current layout.
    pub fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::Page];
        ring.extend(Field::ALL.iter().map(|&f| Focus::Field(f)));
        ring.push(Focus::Submit);
        if self.layout.mobile {
            ring.extend(self.layout.carousels.iter().map(|&(g, _)| Focus::Carousel(g)));
        } else {
            ring.push(Focus::Showcase);
        }
        ring
    }

    /// Move focus `step` places around the ring.
    pub fn cycle_focus(&mut self, step: isize, fields: &ContactFields, active: Group) {
        let ring = self.focus_ring();
        let current = ring.iter().position(|&f| f == self.focus).unwrap_or(0);
        let next = (current as isize + step).rem_euclid(ring.len() as isize) as usize;
        self.set_focus(ring[next], fields, active);
    }

    pub fn set_focus(&mut self, focus: Focus, fields: &ContactFields, active: Group) {
        if focus == self.focus {
            return;
        }
        debug!("Focus {:?} -> {:?}", self.focus, focus);
        self.focus = focus;
        match focus {
            Focus::Field(field) => self.editor.focus(field, fields.get(field)),
            _ => self.editor.blur(),
        }
        if let Some(rect) = self.focus_rect(focus, active) {
            self.page.reveal(rect);
        }
    }

    /// Where the focus target sits on the page, in content coordinates.
    fn focus_rect(&self, focus: Focus, active: Group) -> Option<ratatui::layout::Rect> {
        let contact = self.layout.block(PageBlock::Contact)?;
        let form = contact_section::form_layout(contact, self.layout.mobile);
        match focus {
            Focus::Page => None,
            Focus::Field(field) => form
                .fields
                .iter()
                .find(|(f, _)| *f == field)
                .map(|(_, rect)| *rect),
            Focus::Submit => Some(form.submit),
            Focus::Showcase => self.layout.region_rect(active),
            Focus::Carousel(group) => self
                .layout
                .carousels
                .iter()
                .find(|(g, _)| *g == group)
                .map(|(_, rect)| *rect),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (mouse, bracketed paste, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Show);
    }
}

/// Build the submitter selected on the command line.
pub fn build_submitter(kind: SubmitterKind, config: &ResolvedConfig) -> Arc<dyn ContactSubmitter> {
    match kind {
        SubmitterKind::Log => Arc::new(LogSubmitter),
        SubmitterKind::Outbox => Arc::new(OutboxSubmitter::new(config.outbox.clone())),
    }
}

/// The configured catalog, or the built-in one if none is set or it fails to load.
pub fn load_catalog(config: &ResolvedConfig) -> GroupCatalog {
    let Some(path) = &config.catalog_file else {
        return GroupCatalog::builtin();
    };
    match GroupCatalog::load(path) {
        Ok(catalog) => {
            info!("Loaded catalog from {}", path.display());
            catalog
        }
        Err(e) => {
            warn!("{e}; using the built-in catalog");
            GroupCatalog::builtin()
        }
    }
}

pub fn run(config: ResolvedConfig, kind: SubmitterKind) -> std::io::Result<()> {
    let submitter = build_submitter(kind, &config);
    let catalog = load_catalog(&config);
    let mut tui = TuiState::new(&config, &catalog);
    let mut app = App::new(submitter, catalog).with_submit_timeout(config.submit_timeout);

    // Hero clip autoplays; the page works fine without it
    if let Err(e) = tui
        .hero_player
        .load(HERO_CLIP, "")
        .and_then(|()| tui.hero_player.play())
    {
        warn!("Hero autoplay failed: {}", e);
    }
    tui.showcase_player.sync(&app.showcase, &app.catalog);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.editor.sync(&app.contact.fields);
        if tui.tracker.on_frame() {
            needs_redraw = true;
        }

        let animating =
            tui.hero_player.is_running() || tui.showcase_player.player().is_running();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let mut should_quit = false;
        if let Some(in_view) = tui.regions.observe(&tui.layout.regions, tui.page.viewport())
            && !in_view.is_empty()
        {
            let effect = update(&mut app, Action::RegionsObserved(in_view));
            should_quit |= apply_effect(effect, &app, &mut tui, &tx);
            needs_redraw = true;
        }

        let timeout = if animating {
            config.frame_interval()
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&app, &mut tui, &event) {
                let effect = update(&mut app, action);
                should_quit |= apply_effect(effect, &app, &mut tui, &tx);
            }
        }

        if should_quit {
            break;
        }

        // Results from background submissions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            apply_effect(effect, &app, &mut tui, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Carry out an effect. Returns `true` if the loop should stop.
fn apply_effect(effect: Effect, app: &App, tui: &mut TuiState, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SyncPlayback => {
            tui.showcase_player.sync(&app.showcase, &app.catalog);
            false
        }
        Effect::SpawnSubmission(fields) => {
            spawn_submission(app.submitter.clone(), fields, app.submit_timeout, tx.clone());
            false
        }
    }
}

/// Route one input event. Presentation-only events are handled here; the
/// rest come back as an `Action` for `update()`.
pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let active = app.showcase.active_group;
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::Quit => {
            if tui.focus == Focus::Page {
                return Some(Action::Quit);
            }
            tui.set_focus(Focus::Page, &app.contact.fields, active);
            return None;
        }
        TuiEvent::FocusNext => {
            tui.cycle_focus(1, &app.contact.fields, active);
            return None;
        }
        TuiEvent::FocusPrev => {
            tui.cycle_focus(-1, &app.contact.fields, active);
            return None;
        }
        // Scroll events always go to the page regardless of focus
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToTop
        | TuiEvent::ScrollToBottom => {
            tui.page.handle_event(event);
            return None;
        }
        TuiEvent::MouseClick(column, row) => return handle_click(app, tui, *column, *row),
        _ => {}
    }

    match tui.focus {
        Focus::Page => None,
        Focus::Field(_) => match tui.editor.handle_event(event)? {
            FormEvent::Changed { field, value } => Some(Action::EditField { field, value }),
            FormEvent::Submit => Some(Action::SubmitContact),
        },
        Focus::Submit => match event {
            TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(Action::SubmitContact),
            _ => None,
        },
        Focus::Showcase => {
            let groups: Vec<Group> = app.catalog.groups().collect();
            showcase_action(event, &app.showcase.view(&app.catalog), &groups)
        }
        Focus::Carousel(group) => {
            let carousel = tui.carousel_mut(group)?;
            match event {
                TuiEvent::CursorLeft => {
                    carousel.prev();
                }
                TuiEvent::CursorRight => {
                    carousel.next();
                }
                TuiEvent::InputChar(c) => {
                    if let Some(digit) = c.to_digit(10)
                        && digit >= 1
                    {
                        carousel.go_to(digit as usize - 1);
                    }
                }
                _ => {}
            }
            None
        }
    }
}

fn handle_click(app: &App, tui: &mut TuiState, column: u16, row: u16) -> Option<Action> {
    let active = app.showcase.active_group;
    let fields = &app.contact.fields;
    let Some(target) = ui::hit_test(tui, column, row) else {
        tui.set_focus(Focus::Page, fields, active);
        return None;
    };
    debug!("Click at ({}, {}) hit {:?}", column, row, target);
    match target {
        HitTarget::Nav(link) => {
            tui.set_focus(Focus::Page, fields, active);
            if let Some(rect) = tui.layout.block(nav_block(link, tui.layout.mobile)) {
                tui.page.scroll_to(rect.y);
            }
            None
        }
        HitTarget::Group(group) => {
            tui.set_focus(Focus::Showcase, fields, active);
            Some(Action::GroupSelected(group))
        }
        HitTarget::Control(index) => {
            tui.set_focus(Focus::Showcase, fields, active);
            Some(Action::ControlSelected(index))
        }
        HitTarget::PlayPause => {
            tui.set_focus(Focus::Showcase, fields, active);
            Some(Action::PlayPauseToggled)
        }
        HitTarget::Field(field) => {
            tui.set_focus(Focus::Field(field), fields, active);
            None
        }
        HitTarget::Submit => {
            tui.set_focus(Focus::Submit, fields, active);
            Some(Action::SubmitContact)
        }
        HitTarget::CarouselPrev(group) => {
            tui.set_focus(Focus::Carousel(group), fields, active);
            if let Some(carousel) = tui.carousel_mut(group) {
                carousel.prev();
            }
            None
        }
        HitTarget::CarouselNext(group) => {
            tui.set_focus(Focus::Carousel(group), fields, active);
            if let Some(carousel) = tui.carousel_mut(group) {
                carousel.next();
            }
            None
        }
    }
}

fn nav_block(link: NavLink, mobile: bool) -> PageBlock {
    match link {
        NavLink::Company => PageBlock::Hero,
        NavLink::Applications if mobile => PageBlock::MobileShowcase,
        NavLink::Applications => PageBlock::ShowcaseHeading,
        NavLink::Contact => PageBlock::Contact,
        NavLink::Careers => PageBlock::Footer,
    }
}

fn spawn_submission(
    submitter: Arc<dyn ContactSubmitter>,
    fields: ContactFields,
    timeout: Duration,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning contact submission via {}", submitter.name());
    tokio::spawn(async move {
        let result = submit_with_timeout(submitter.as_ref(), &fields, timeout).await;
        if tx.send(Action::ContactSubmitted(result)).is_err() {
            warn!("Failed to send submission result: receiver dropped");
        }
    });
}
