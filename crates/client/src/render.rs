//! Plain-text rendering of the watchlist view.

use std::fmt::Write as _;

use watchlist_core::record::MovieRecord;

use crate::view::{Mode, ViewState};

/// "Watched" or "To Watch".
pub fn status_label(record: &MovieRecord) -> &'static str {
    if record.watched {
        "Watched"
    } else {
        "To Watch"
    }
}

pub fn render_record(record: &MovieRecord) -> String {
    format!(
        "{title}  [{id}]\n  Genre: {genre}\n  Year: {year}\n  Status: {status}\n",
        title = record.title,
        id = record.id,
        genre = record.genre,
        year = record.year,
        status = status_label(record),
    )
}

/// Render the filtered list under a header naming the filter.
pub fn render_view(state: &ViewState) -> String {
    let visible = state.visible();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Movie Watchlist ({} of {}, filter: {})",
        visible.len(),
        state.records().len(),
        state.filter()
    );
    if let Mode::Editing(id) = state.mode() {
        let _ = writeln!(out, "Editing {id}");
    }
    if visible.is_empty() {
        out.push_str("  (no movies)\n");
    }
    for record in visible {
        out.push('\n');
        out.push_str(&render_record(record));
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::filter::Filter;
    use crate::view::{reduce, Action};

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
    fn record_shows_status_line() {
        let text = render_record(&record("Dune", false));
        assert!(text.starts_with("Dune"));
        assert!(text.contains("Year: 2021"));
        assert!(text.contains("Status: To Watch"));
    }

    #[test]
    fn view_lists_only_filtered_records() {
        let state = reduce(
            &ViewState::default(),
            Action::Loaded(vec![record("Dune", true), record("Alien", false)]),
        );
        let state = reduce(&state, Action::FilterChanged(Filter::Watched));

        let text = render_view(&state);
        assert!(text.contains("1 of 2, filter: watched"));
        assert!(text.contains("Dune"));
        assert!(!text.contains("Alien"));
    }

    #[test]
    fn empty_view_says_so() {
        assert!(render_view(&ViewState::default()).contains("(no movies)"));
    }
}
