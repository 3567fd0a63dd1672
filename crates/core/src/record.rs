//! Movie record model, input DTOs, and validation.
//!
//! Input DTOs ([`CreateRecord`], [`UpdateRecord`]) are lenient: every field
//! is optional on the wire so a missing field surfaces as a
//! [`CoreError::Validation`] rather than a deserialization failure. They are
//! validated into [`NewRecord`] / [`RecordChanges`] before reaching a store.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::{RecordId, Timestamp};
use crate::watched::{deserialize_watched, merge_watched, resolve_watched};

/// Entity name used in not-found errors.
pub const RECORD_ENTITY: &str = "Movie";

/// A persisted movie watchlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: RecordId,
    pub title: String,
    pub genre: String,
    pub year: i32,
    #[serde(default, deserialize_with = "deserialize_watched")]
    pub watched: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Confirmation returned by `DELETE /records/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedRecord {
    pub id: RecordId,
    pub deleted: bool,
}

/// Body of `POST /records`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordBody")]
pub struct CreateRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched: Option<bool>,
}

/// Body of `PUT /records/{id}`. Only the provided fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordBody")]
pub struct UpdateRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched: Option<bool>,
}

/// Wire shape shared by both input bodies. `watched` and the legacy
/// `Watched` key may both be present; they are merged by [`merge_watched`].
#[derive(Deserialize)]
struct RecordBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default, deserialize_with = "deserialize_year")]
    year: Option<i32>,
    #[serde(default)]
    watched: Option<bool>,
    #[serde(default, rename = "Watched")]
    legacy_watched: Option<bool>,
}

impl From<RecordBody> for CreateRecord {
    fn from(body: RecordBody) -> Self {
        Self {
            title: body.title,
            genre: body.genre,
            year: body.year,
            watched: merge_watched(body.watched, body.legacy_watched),
        }
    }
}

impl From<RecordBody> for UpdateRecord {
    fn from(body: RecordBody) -> Self {
        Self {
            title: body.title,
            genre: body.genre,
            year: body.year,
            watched: merge_watched(body.watched, body.legacy_watched),
        }
    }
}

/// A validated record ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub watched: bool,
}

/// A validated partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordChanges {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub watched: Option<bool>,
}

impl CreateRecord {
    /// Check required fields and produce a [`NewRecord`].
    ///
    /// `title` and `genre` must be non-blank, `year` must be present and
    /// non-zero. All missing fields are reported in a single error.
    pub fn validate(self) -> Result<NewRecord, CoreError> {
        let title = non_blank(self.title);
        let genre = non_blank(self.genre);
        let year = self.year.filter(|y| *y != 0);

        match (title, genre, year) {
            (Some(title), Some(genre), Some(year)) => Ok(NewRecord {
                title,
                genre,
                year,
                watched: resolve_watched(self.watched),
            }),
            (title, genre, year) => {
                let missing: Vec<&str> = [
                    ("title", title.is_none()),
                    ("genre", genre.is_none()),
                    ("year", year.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(CoreError::Validation(format!(
                    "Title, genre, and year are required (missing: {})",
                    missing.join(", ")
                )))
            }
        }
    }
}

impl UpdateRecord {
    /// Validate the provided fields with the same rules as creation.
    pub fn validate(self) -> Result<RecordChanges, CoreError> {
        let title = provided_non_blank("title", self.title)?;
        let genre = provided_non_blank("genre", self.genre)?;
        if self.year == Some(0) {
            return Err(CoreError::Validation("year must not be zero".to_string()));
        }
        Ok(RecordChanges {
            title,
            genre,
            year: self.year,
            watched: self.watched,
        })
    }
}

impl RecordChanges {
    /// Returns `true` if no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.genre.is_none() && self.year.is_none() && self.watched.is_none()
    }

    /// Apply the provided fields to `record` in place.
    pub fn apply_to(self, record: &mut MovieRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(genre) = self.genre {
            record.genre = genre;
        }
        if let Some(year) = self.year {
            record.year = year;
        }
        if let Some(watched) = self.watched {
            record.watched = watched;
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn provided_non_blank(field: &str, value: Option<String>) -> Result<Option<String>, CoreError> {
    match value {
        None => Ok(None),
        Some(v) => non_blank(Some(v))
            .map(Some)
            .ok_or_else(|| CoreError::Validation(format!("{field} must not be empty"))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearInput {
    Number(i64),
    Text(String),
}

/// Accept `year` as a JSON integer or a numeric string. Blank strings and
/// `null` count as absent.
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<YearInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(YearInput::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("year {n} is out of range"))),
        Some(YearInput::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("year must be an integer, got '{trimmed}'")))
        }
    }
}
