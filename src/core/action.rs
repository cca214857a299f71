//! # Actions
//!
//! Everything that can happen on the page becomes an `Action`.
//! User clicks the "Cabin" control? That's `Action::ControlSelected(2)`.
//! The commercial region scrolls into view? That's `Action::RegionsObserved(..)`.
//! The submitter answers? That's `Action::ContactSubmitted(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` describing any I/O the caller must do.
//! No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::catalog::Group;
use crate::core::contact::{ContactFields, Field};
use crate::core::state::App;
use crate::submission::SubmitError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    /// In-view flags for every anchor region, in precedence order.
    RegionsObserved(Vec<(Group, bool)>),
    ControlSelected(usize),
    GroupSelected(Group),
    PlayPauseToggled,
    EditField { field: Field, value: String },
    SubmitContact,
    ContactSubmitted(Result<(), SubmitError>),
}

/// Work the caller has to carry out after `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// The showcase view changed; reconcile the media handle.
    SyncPlayback,
    /// Hand these fields to the submitter off the UI thread.
    SpawnSubmission(ContactFields),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::Quit => Effect::Quit,

        Action::RegionsObserved(in_view) => {
            if app.showcase.observe_regions(&in_view) {
                Effect::SyncPlayback
            } else {
                Effect::None
            }
        }

        Action::ControlSelected(index) => {
            app.showcase.select_control(index);
            Effect::SyncPlayback
        }

        Action::GroupSelected(group) => {
            app.showcase.select_group(group);
            Effect::SyncPlayback
        }

        Action::PlayPauseToggled => {
            app.showcase.toggle_play();
            Effect::SyncPlayback
        }

        Action::EditField { field, value } => {
            app.contact.edit(field, value);
            Effect::None
        }

        Action::SubmitContact => match app.contact.begin_submit() {
            Some(fields) => {
                app.status_message = String::from("Sending your enquiry...");
                Effect::SpawnSubmission(fields)
            }
            None => {
                if !app.contact.errors.is_empty() {
                    app.status_message =
                        format!("Please fix {} field(s)", app.contact.errors.len());
                }
                Effect::None
            }
        },

        Action::ContactSubmitted(result) => {
            let succeeded = result.is_ok();
            app.contact.finish_submit(succeeded);
            app.status_message = match result {
                Ok(()) => String::from("Enquiry sent"),
                Err(e) => format!("Enquiry not sent ({e})"),
            };
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::{GENERIC_FAILURE, Notice};
    use crate::test_support::test_app;

    fn fill(app: &mut App) {
        for (field, value) in [
            (Field::Name, "A"),
            (Field::Email, "a@b.co"),
            (Field::Message, "hi"),
        ] {
            update(
                app,
                Action::EditField {
                    field,
                    value: value.to_string(),
                },
            );
        }
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_group_switch_resets_index_and_keeps_play_state() {
        let mut app = test_app();
        update(&mut app, Action::ControlSelected(3));
        update(&mut app, Action::PlayPauseToggled);
        assert!(!app.showcase.is_playing);

        let effect = update(&mut app, Action::GroupSelected(Group::Commercial));
        assert_eq!(effect, Effect::SyncPlayback);
        assert_eq!(app.showcase.active_group, Group::Commercial);
        assert_eq!(app.showcase.active_index, 0);
        assert!(!app.showcase.is_playing);
    }

    #[test]
    fn test_selecting_a_control_resumes_playback() {
        let mut app = test_app();
        update(&mut app, Action::PlayPauseToggled);
        assert!(!app.showcase.is_playing);

        update(&mut app, Action::ControlSelected(2));
        assert!(app.showcase.is_playing);
        assert_eq!(app.showcase.active_index, 2);
        assert_eq!(app.showcase.active_group, Group::Passenger);
    }

    #[test]
    fn test_regions_observed() {
        let mut app = test_app();
        update(&mut app, Action::ControlSelected(4));

        let effect = update(
            &mut app,
            Action::RegionsObserved(vec![(Group::Passenger, false), (Group::Commercial, true)]),
        );
        assert_eq!(effect, Effect::SyncPlayback);
        assert_eq!(app.showcase.active_group, Group::Commercial);
        assert_eq!(app.showcase.active_index, 0);

        // Nothing in view: last state holds.
        update(&mut app, Action::ControlSelected(1));
        let effect = update(
            &mut app,
            Action::RegionsObserved(vec![(Group::Passenger, false), (Group::Commercial, false)]),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.showcase.active_group, Group::Commercial);
        assert_eq!(app.showcase.active_index, 1);
    }

    #[test]
    fn test_out_of_range_control_reads_as_first() {
        let mut app = test_app();
        update(&mut app, Action::GroupSelected(Group::Commercial));
        update(&mut app, Action::ControlSelected(4));
        assert_eq!(app.showcase.resolved_index(&app.catalog), 0);
        assert_eq!(
            app.showcase.current_item(&app.catalog).map(|i| i.id),
            Some(1)
        );
    }

    #[test]
    fn test_invalid_submit_spawns_nothing() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SubmitContact);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.contact.errors.len(), 3);
        assert!(!app.contact.submitting);
    }

    #[test]
    fn test_submit_flow_success_resets_fields() {
        let mut app = test_app();
        fill(&mut app);

        let effect = update(&mut app, Action::SubmitContact);
        let Effect::SpawnSubmission(fields) = effect else {
            panic!("expected a submission, got {effect:?}");
        };
        assert_eq!(fields.email, "a@b.co");
        assert!(app.contact.submitting);
        assert_eq!(app.contact.submit_label(), "Sending...");

        // A second submit while in flight is ignored.
        assert_eq!(update(&mut app, Action::SubmitContact), Effect::None);

        update(&mut app, Action::ContactSubmitted(Ok(())));
        assert!(!app.contact.submitting);
        assert_eq!(app.contact.fields, ContactFields::default());
        assert_eq!(app.contact.notice, Some(Notice::Sent));
    }

    #[test]
    fn test_submit_flow_failure_preserves_fields() {
        let mut app = test_app();
        fill(&mut app);
        update(&mut app, Action::SubmitContact);
        let before = app.contact.fields.clone();

        update(
            &mut app,
            Action::ContactSubmitted(Err(SubmitError::Rejected("smtp down".into()))),
        );
        assert!(!app.contact.submitting);
        assert_eq!(app.contact.fields, before);
        assert_eq!(app.contact.notice.map(Notice::message), Some(GENERIC_FAILURE));
    }

    #[test]
    fn test_edit_clears_only_that_fields_error() {
        let mut app = test_app();
        update(&mut app, Action::SubmitContact);
        assert!(app.contact.errors.get(Field::Name).is_some());

        update(
            &mut app,
            Action::EditField {
                field: Field::Name,
                value: "A".into(),
            },
        );
        assert!(app.contact.errors.get(Field::Name).is_none());
        assert!(app.contact.errors.get(Field::Email).is_some());
    }
}
