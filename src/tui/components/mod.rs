//! # TUI Components
//!
//! This module contains the sections of the landing page plus the chrome
//! around it.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Page Sections (Widgets)
//!
//! Everything that scrolls with the page renders into the page's
//! `ScrollView`, so these implement ratatui's `Widget` and take their data as
//! props:
//! - `HeroSection`: full-viewport opening with the background clip
//! - `ContactSection`: contact details and the enquiry form
//! - `ShowcaseHeading` / `ShowcasePanel`: the desktop showcase
//! - `CarouselView`: one narrow-screen carousel per vehicle group
//! - `Footer`: link columns and copyright
//!
//! ### Chrome (Components)
//!
//! Fixed to the terminal rather than the page, drawn straight to the frame:
//! - `Header`: hides on scroll down, elevated past the fold
//! - `StatusBar`: status message and key hints
//!
//! `FormEditor` is the one stateful piece: it edits the focused form field
//! and emits `FormEvent`s.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props (struct fields), not by reaching
//! into `App`. Layout structs (`PanelLayout`, `FormLayout`, `CarouselLayout`)
//! are computed the same way for drawing and for hit testing, so a click
//! always lands on what was drawn.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── header.rs           (fixed site header)
//! ├── status_bar.rs       (bottom status line)
//! ├── hero.rs             (opening section)
//! ├── contact_section.rs  (get in touch)
//! ├── contact_form/       (form fields and the field editor)
//! ├── showcase.rs         (desktop showcase panel)
//! ├── carousel.rs         (narrow-screen carousels)
//! └── footer.rs
//! ```

pub mod carousel;
pub mod contact_form;
pub mod contact_section;
pub mod footer;
pub mod header;
pub mod hero;
pub mod showcase;
pub mod status_bar;
