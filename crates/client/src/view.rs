//! Immutable view state and its reducer.
//!
//! The view never mutates in place: every user or network event is an
//! [`Action`], and [`reduce`] returns the next [`ViewState`].

use watchlist_core::record::MovieRecord;
use watchlist_core::types::RecordId;

use crate::filter::Filter;
use crate::form::{FormField, FormFields};

/// Whether the form adds a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Adding,
    Editing(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A full list fetched from the server replaces the local one.
    Loaded(Vec<MovieRecord>),
    FilterChanged(Filter),
    FieldChanged(FormField),
    /// Switch to editing mode, pre-filling the form from the record.
    EditSelected(MovieRecord),
    /// Back to adding mode with an empty form.
    EditCancelled,
    /// A create or update succeeded; clear the form and selection.
    SubmitSucceeded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    records: Vec<MovieRecord>,
    filter: Filter,
    form: FormFields,
    editing: Option<RecordId>,
}

impl ViewState {
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn mode(&self) -> Mode {
        match self.editing {
            Some(id) => Mode::Editing(id),
            None => Mode::Adding,
        }
    }

    /// Records passing the current filter.
    pub fn visible(&self) -> Vec<&MovieRecord> {
        self.filter.apply(&self.records)
    }

    pub fn find(&self, id: RecordId) -> Option<&MovieRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// Compute the state that follows `action`.
pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    match action {
        Action::Loaded(records) => {
            // A record being edited that vanished server-side can no longer
            // be updated, so fall back to adding.
            let still_present = state
                .editing
                .is_some_and(|id| records.iter().any(|r| r.id == id));
            let (editing, form) = if state.editing.is_none() || still_present {
                (state.editing, state.form.clone())
            } else {
                (None, FormFields::default())
            };
            ViewState {
                records,
                filter: state.filter,
                form,
                editing,
            }
        }
        Action::FilterChanged(filter) => ViewState {
            filter,
            ..state.clone()
        },
        Action::FieldChanged(field) => ViewState {
            form: state.form.with(field),
            ..state.clone()
        },
        Action::EditSelected(record) => ViewState {
            form: FormFields::from_record(&record),
            editing: Some(record.id),
            ..state.clone()
        },
        Action::EditCancelled | Action::SubmitSucceeded => ViewState {
            form: FormFields::default(),
            editing: None,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn record(title: &str, watched: bool) -> MovieRecord {
        let now = Utc::now();
        MovieRecord {
            id: uuid::Uuid::now_v7(),
            title: title.to_string(),
            genre: "Sci-Fi".to_string(),
            year: 2021,
            watched,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn starts_in_adding_mode_with_all_filter() {
        let state = ViewState::default();
        assert_eq!(state.mode(), Mode::Adding);
        assert_eq!(state.filter(), Filter::All);
        assert!(state.records().is_empty());
    }

    #[test]
    fn loaded_replaces_records() {
        let first = reduce(&ViewState::default(), Action::Loaded(vec![record("A", false)]));
        let second = reduce(&first, Action::Loaded(vec![record("B", true)]));
        assert_eq!(second.records().len(), 1);
        assert_eq!(second.records()[0].title, "B");
    }

    #[test]
    fn reduce_leaves_previous_state_untouched() {
        let before = ViewState::default();
        let after = reduce(&before, Action::FilterChanged(Filter::Watched));
        assert_eq!(before.filter(), Filter::All);
        assert_eq!(after.filter(), Filter::Watched);
    }

    #[test]
    fn filter_changes_visible_records() {
        let dune = record("Dune", true);
        let state = reduce(
            &ViewState::default(),
            Action::Loaded(vec![dune.clone(), record("Alien", false)]),
        );

        let watched = reduce(&state, Action::FilterChanged(Filter::Watched));
        assert_eq!(watched.visible(), vec![&dune]);

        let to_watch = reduce(&state, Action::FilterChanged(Filter::ToWatch));
        assert!(to_watch.visible().iter().all(|r| r.id != dune.id));
    }

    #[test]
    fn selecting_a_record_prefills_form() {
        let dune = record("Dune", true);
        let state = reduce(&ViewState::default(), Action::EditSelected(dune.clone()));

        assert_eq!(state.mode(), Mode::Editing(dune.id));
        assert_eq!(state.form().title, "Dune");
        assert_eq!(state.form().year, "2021");
        assert!(state.form().watched);
    }

    #[test]
    fn cancel_and_submit_clear_form_and_selection() {
        let dune = record("Dune", false);
        let editing = reduce(&ViewState::default(), Action::EditSelected(dune));

        for action in [Action::EditCancelled, Action::SubmitSucceeded] {
            let next = reduce(&editing, action);
            assert_eq!(next.mode(), Mode::Adding);
            assert_eq!(next.form(), &FormFields::default());
        }
    }

    #[test]
    fn field_changes_update_form_only() {
        let state = reduce(
            &ViewState::default(),
            Action::FieldChanged(FormField::Genre("Drama".into())),
        );
        assert_eq!(state.form().genre, "Drama");
        assert_eq!(state.mode(), Mode::Adding);
    }

    #[test]
    fn reload_without_edited_record_returns_to_adding() {
        let dune = record("Dune", false);
        let state = reduce(&ViewState::default(), Action::Loaded(vec![dune.clone()]));
        let editing = reduce(&state, Action::EditSelected(dune.clone()));

        let kept = reduce(&editing, Action::Loaded(vec![dune.clone()]));
        assert_eq!(kept.mode(), Mode::Editing(dune.id));
        assert_eq!(kept.form().title, "Dune");

        let dropped = reduce(&editing, Action::Loaded(vec![record("Alien", false)]));
        assert_eq!(dropped.mode(), Mode::Adding);
        assert_eq!(dropped.form(), &FormFields::default());
    }
}
