use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::core::playback::MediaPlayer;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::carousel::{CarouselLayout, CarouselView};
use crate::tui::components::contact_section::{self, ContactSection};
use crate::tui::components::footer::Footer;
use crate::tui::components::header::Header;
use crate::tui::components::hero::HeroSection;
use crate::tui::components::showcase::{ShowcaseHeading, ShowcasePanel};
use crate::tui::components::status_bar::StatusBar;
use crate::tui::page::{PageBlock, PageLayout};
use crate::tui::{Focus, HitTarget, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [page_area, status_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    draw_page(frame, page_area, app, tui);

    // Header floats over the page
    let mut header = Header::new(tui.tracker.header_state(tui.elevate_after));
    tui.header_height = header.height().min(page_area.height);
    tui.nav_targets = header.nav_targets(page_area);
    header.render(frame, page_area);

    StatusBar::new(app.status_message.clone(), tui.focus.hint()).render(frame, status_area);
}

fn draw_page(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let mobile = area.width < tui.mobile_breakpoint;
    let content_width = area.width.saturating_sub(1);

    let layout = PageLayout::compute(content_width, area.height, mobile, &app.catalog);
    if layout != tui.layout {
        debug!(
            "Page layout changed: {}x{} viewport, {} rows, mobile={}",
            content_width, area.height, layout.total_height, mobile
        );
        tui.layout = layout;
    }
    tui.page.set_bounds(tui.layout.total_height, area.height);
    tui.page_area = area;

    let layout = tui.layout.clone();
    let offset = tui.page.offset();
    let mut targets: Vec<(Rect, HitTarget)> = Vec::new();

    let mut scroll_view = ScrollView::new(Size::new(content_width, layout.total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    for &(block, rect) in &layout.blocks {
        match block {
            PageBlock::Hero => scroll_view.render_widget(
                HeroSection {
                    source: tui.hero_player.source(),
                    progress: tui.hero_player.progress(),
                    playing: tui.hero_player.is_running(),
                },
                rect,
            ),
            PageBlock::Contact => {
                let form = contact_section::form_layout(rect, mobile);
                targets.extend(form.fields.iter().map(|&(f, r)| (r, HitTarget::Field(f))));
                targets.push((form.submit, HitTarget::Submit));
                scroll_view.render_widget(
                    ContactSection {
                        form: &app.contact,
                        editor: &tui.editor,
                        focus: tui.focus.form_focus(),
                        mobile,
                    },
                    rect,
                );
            }
            PageBlock::ShowcaseHeading => scroll_view.render_widget(ShowcaseHeading, rect),
            PageBlock::Stage => {
                scroll_view.render_widget(Block::new().style(Style::default().bg(Color::Black)), rect);
                let Some(panel_area) = layout.sticky_panel(offset) else {
                    continue;
                };
                let panel = ShowcasePanel {
                    catalog: &app.catalog,
                    view: app.showcase.view(&app.catalog),
                    progress: tui.showcase_player.player().progress(),
                    focused: tui.focus == Focus::Showcase,
                };
                let panel_layout = panel.layout(panel_area);
                targets.extend(
                    panel_layout
                        .groups
                        .iter()
                        .map(|&(g, r)| (r, HitTarget::Group(g))),
                );
                targets.extend(
                    panel_layout
                        .controls
                        .iter()
                        .enumerate()
                        .map(|(i, &r)| (r, HitTarget::Control(i))),
                );
                targets.push((panel_layout.play, HitTarget::PlayPause));
                scroll_view.render_widget(panel, panel_area);
            }
            PageBlock::MobileShowcase => {
                for &(group, carousel_area) in &layout.carousels {
                    let Some(entry) = app.catalog.get(group) else {
                        continue;
                    };
                    let carousel_layout = CarouselLayout::compute(carousel_area);
                    targets.push((carousel_layout.prev, HitTarget::CarouselPrev(group)));
                    targets.push((carousel_layout.next, HitTarget::CarouselNext(group)));
                    scroll_view.render_widget(
                        CarouselView {
                            group: entry,
                            state: tui.carousel(group),
                            focused: tui.focus == Focus::Carousel(group),
                        },
                        carousel_area,
                    );
                }
            }
            PageBlock::Footer => scroll_view.render_widget(Footer, rect),
        }
    }

    tui.hit_targets = targets;
    frame.render_stateful_widget(scroll_view, area, &mut tui.page.scroll_state);
}

/// Hit test: map a screen position to whatever clickable part of the page is under it.
pub fn hit_test(tui: &TuiState, column: u16, row: u16) -> Option<HitTarget> {
    let area = tui.page_area;
    if !area.contains(Position::new(column, row)) {
        return None;
    }
    // Rows under a visible header belong to the header
    if row < area.y.saturating_add(tui.header_height) {
        let position = Position::new(column, row);
        return tui
            .nav_targets
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, link)| HitTarget::Nav(*link));
    }

    let content = Position::new(
        column - area.x,
        (row - area.y).saturating_add(tui.page.offset()),
    );
    tui.hit_targets
        .iter()
        .find(|(rect, _)| rect.contains(content))
        .map(|(_, target)| *target)
}
