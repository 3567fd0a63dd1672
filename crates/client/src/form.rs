//! Add/edit form values and their conversion into request bodies.

use watchlist_core::record::{CreateRecord, MovieRecord, UpdateRecord};

use crate::error::ClientError;

/// One edited form input.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Title(String),
    Genre(String),
    /// Raw text as typed; parsed on submit.
    Year(String),
    Watched(bool),
}

/// Current form values. The empty form is the "add" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub title: String,
    pub genre: String,
    pub year: String,
    pub watched: bool,
}

impl FormFields {
    /// Pre-fill the form from a record selected for editing.
    pub fn from_record(record: &MovieRecord) -> Self {
        Self {
            title: record.title.clone(),
            genre: record.genre.clone(),
            year: record.year.to_string(),
            watched: record.watched,
        }
    }

    /// Return a copy with one field replaced.
    pub fn with(&self, field: FormField) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Title(title) => next.title = title,
            FormField::Genre(genre) => next.genre = genre,
            FormField::Year(year) => next.year = year,
            FormField::Watched(watched) => next.watched = watched,
        }
        next
    }

    /// Body for creating a record from the form.
    ///
    /// Applies the same required-field rules as the server so an incomplete
    /// form never leaves the client.
    pub fn to_create(&self) -> Result<CreateRecord, ClientError> {
        let input = CreateRecord {
            title: Some(self.title.clone()),
            genre: Some(self.genre.clone()),
            year: self.parse_year()?,
            watched: Some(self.watched),
        };
        input
            .clone()
            .validate()
            .map_err(|e| ClientError::InvalidForm(e.to_string()))?;
        Ok(input)
    }

    /// Body for updating the selected record. Every form field is sent, so a
    /// blank year is rejected like a blank title.
    pub fn to_update(&self) -> Result<UpdateRecord, ClientError> {
        let year = self
            .parse_year()?
            .ok_or_else(|| ClientError::InvalidForm("year must not be empty".to_string()))?;
        let input = UpdateRecord {
            title: Some(self.title.clone()),
            genre: Some(self.genre.clone()),
            year: Some(year),
            watched: Some(self.watched),
        };
        input
            .clone()
            .validate()
            .map_err(|e| ClientError::InvalidForm(e.to_string()))?;
        Ok(input)
    }

    /// Blank year is "not provided"; anything else must be an integer.
    fn parse_year(&self) -> Result<Option<i32>, ClientError> {
        let year = self.year.trim();
        if year.is_empty() {
            return Ok(None);
        }
        year.parse::<i32>()
            .map(Some)
            .map_err(|_| ClientError::InvalidForm(format!("Year must be a number, got '{year}'")))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn filled() -> FormFields {
        FormFields::default()
            .with(FormField::Title("Dune".into()))
            .with(FormField::Genre("Sci-Fi".into()))
            .with(FormField::Year("2021".into()))
    }

    #[test]
    fn with_returns_updated_copy() {
        let empty = FormFields::default();
        let next = empty.with(FormField::Watched(true));
        assert!(next.watched);
        assert!(!empty.watched);
    }

    #[test]
    fn filled_form_builds_create_body() {
        let body = filled().to_create().unwrap();
        assert_eq!(body.title.as_deref(), Some("Dune"));
        assert_eq!(body.year, Some(2021));
        assert_eq!(body.watched, Some(false));
    }

    #[test]
    fn non_numeric_year_is_rejected_locally() {
        let form = filled().with(FormField::Year("20x1".into()));
        assert_matches!(form.to_create(), Err(ClientError::InvalidForm(msg)) if msg.contains("20x1"));
    }

    #[test]
    fn missing_title_is_rejected_locally() {
        let form = filled().with(FormField::Title(String::new()));
        assert_matches!(form.to_create(), Err(ClientError::InvalidForm(_)));
    }

    #[test]
    fn blank_year_on_update_is_rejected_like_blank_title() {
        let blank_year = filled().with(FormField::Year(" ".into()));
        assert_matches!(blank_year.to_update(), Err(ClientError::InvalidForm(msg)) if msg.contains("year"));

        let blank_title = filled().with(FormField::Title(String::new()));
        assert_matches!(blank_title.to_update(), Err(ClientError::InvalidForm(msg)) if msg.contains("title"));
    }

    #[test]
    fn filled_form_builds_full_update_body() {
        let body = filled().with(FormField::Watched(true)).to_update().unwrap();
        assert_eq!(body.title.as_deref(), Some("Dune"));
        assert_eq!(body.genre.as_deref(), Some("Sci-Fi"));
        assert_eq!(body.year, Some(2021));
        assert_eq!(body.watched, Some(true));
    }
}
