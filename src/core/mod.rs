//! # Core Page Logic
//!
//! This module contains the showroom's page logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌──────────────────────────┐
//!                    │          CORE            │
//!                    │   (this module)          │
//!                    │                          │
//!                    │  • State (App)           │
//!                    │  • Action + update()     │
//!                    │  • Scroll tracker        │
//!                    │  • Showcase view state   │
//!                    │  • Contact validation    │
//!                    │                          │
//!                    │  No terminal. No I/O.    │
//!                    └────────────┬─────────────┘
//!                                 │
//!                  ┌──────────────┴──────────────┐
//!                  ▼                             ▼
//!           ┌────────────┐                ┌────────────┐
//!           │    TUI     │                │ Submission │
//!           │  Adapter   │                │ (log, file)│
//!           │ (ratatui)  │                │            │
//!           └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all page state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`scroll`]: Scroll direction tracking with hysteresis
//! - [`showcase`]: Which group and clip the showcase shows
//! - [`catalog`]: The media items per vehicle group
//! - [`playback`]: Keeps the single media handle in step with the view
//! - [`contact`]: Contact form fields and validation
//! - [`carousel`]: Index state for the narrow-screen carousels
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod playback;
pub mod scroll;
pub mod showcase;
pub mod state;
