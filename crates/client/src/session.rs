//! Session controller: runs requests and feeds results through the reducer.
//!
//! Every successful mutation is followed by a full list reload. A failed
//! request is logged and leaves the view state exactly as it was. A failed
//! reload after a successful mutation is logged but does not turn the
//! mutation into an error.

use watchlist_core::record::MovieRecord;
use watchlist_core::types::RecordId;

use crate::api::WatchlistApi;
use crate::error::ClientError;
use crate::filter::Filter;
use crate::form::FormField;
use crate::view::{reduce, Action, Mode, ViewState};

pub struct WatchlistSession {
    api: WatchlistApi,
    state: ViewState,
}

impl WatchlistSession {
    pub fn new(api: WatchlistApi) -> Self {
        Self {
            api,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api(&self) -> &WatchlistApi {
        &self.api
    }

    /// Apply a local action (no network).
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, action);
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.dispatch(Action::FilterChanged(filter));
    }

    pub fn change_field(&mut self, field: FormField) {
        self.dispatch(Action::FieldChanged(field));
    }

    /// Select a loaded record for editing.
    pub fn select(&mut self, id: RecordId) -> Result<(), ClientError> {
        let record = self
            .state
            .find(id)
            .cloned()
            .ok_or_else(|| ClientError::InvalidForm(format!("No loaded record with id {id}")))?;
        self.dispatch(Action::EditSelected(record));
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(Action::EditCancelled);
    }

    /// Fetch the full list and replace the local one.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.api.list().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Fetched records");
                self.dispatch(Action::Loaded(records));
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching records");
                Err(e)
            }
        }
    }

    /// Create or update from the form depending on the current mode, then
    /// clear the form and reload.
    pub async fn submit(&mut self) -> Result<MovieRecord, ClientError> {
        let result = match self.state.mode() {
            Mode::Adding => match self.state.form().to_create() {
                Ok(body) => self.api.create(&body).await,
                Err(e) => Err(e),
            },
            Mode::Editing(id) => match self.state.form().to_update() {
                Ok(body) => self.api.update(id, &body).await,
                Err(e) => Err(e),
            },
        };

        let saved = result.inspect_err(|e| {
            tracing::error!(error = %e, "Error saving record");
        })?;
        tracing::debug!(id = %saved.id, "Record saved");

        self.dispatch(Action::SubmitSucceeded);
        self.refresh().await;
        Ok(saved)
    }

    /// Delete a record, then reload.
    pub async fn delete(&mut self, id: RecordId) -> Result<(), ClientError> {
        self.api.delete(id).await.inspect_err(|e| {
            tracing::error!(error = %e, %id, "Error deleting record");
        })?;
        self.refresh().await;
        Ok(())
    }

    /// Reload after a mutation that already succeeded. On failure the
    /// previous list stays until the next successful load.
    async fn refresh(&mut self) {
        if self.load().await.is_err() {
            tracing::warn!("Record list is stale until the next successful load");
        }
    }
}
