//! Workflow state and its transitions.
//!
//! Transitions are plain methods on [`WorkflowState`]; the orchestrator in
//! [`crate::workflow`] sequences them around the asynchronous lookup.

use crate::book::AddressBook;
use crate::dedup::dedup_candidates;
use crate::validation::PersonalInfo;
use crate::{WorkflowError, WorkflowResult};
use api_shared::Address;

/// Coarse position of a session in the lookup-select-commit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No results on screen.
    Idle,
    /// A lookup is in flight.
    Searching,
    /// Candidates are available but none is selected.
    Results,
    /// A candidate is selected and personal info may be committed.
    Selected,
}

/// Per-session search and selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowState {
    loading: bool,
    search_results: Vec<Address>,
    selected_id: Option<String>,
    error: Option<String>,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn search_results(&self) -> &[Address] {
        &self.search_results
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Searching
        } else if self.selected_id.is_some() {
            Phase::Selected
        } else if !self.search_results.is_empty() {
            Phase::Results
        } else {
            Phase::Idle
        }
    }

    /// Enters the searching phase: results and selection are cleared before the lookup resolves.
    pub fn begin_search(&mut self) {
        self.loading = true;
        self.search_results.clear();
        self.selected_id = None;
    }

    /// Leaves the searching phase with the lookup outcome.
    ///
    /// An empty success list is treated as [`WorkflowError::NotFound`]. Returns the number of
    /// candidates kept after deduplication.
    pub fn finish_search(
        &mut self,
        outcome: WorkflowResult<Vec<Address>>,
        house_number: &str,
    ) -> WorkflowResult<usize> {
        self.loading = false;
        match outcome {
            Ok(candidates) if candidates.is_empty() => self.fail(WorkflowError::NotFound),
            Ok(candidates) => {
                self.replace_results(candidates, house_number);
                Ok(self.search_results.len())
            }
            Err(err) => self.fail(err),
        }
    }

    /// Stores a new candidate list, attaching `house_number` to each and collapsing
    /// duplicates. Clears the selection and any error.
    pub fn replace_results(&mut self, candidates: Vec<Address>, house_number: &str) {
        let attached = candidates
            .into_iter()
            .map(|candidate| candidate.with_house_number(house_number))
            .collect();
        self.search_results = dedup_candidates(attached);
        self.selected_id = None;
        self.error = None;
    }

    /// Selects the candidate with `id` if it is among the current results.
    ///
    /// Returns `true` if the selection changed to `id`.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.search_results.iter().any(|candidate| candidate.id == id) {
            return false;
        }
        self.selected_id = Some(id.to_owned());
        true
    }

    /// Merges personal details into the selected candidate and inserts it into `book`.
    ///
    /// Returns `true` if a new book entry was created, `false` if an entry with the same id
    /// already existed. Search results and selection are left untouched either way.
    pub fn commit(
        &mut self,
        book: &mut AddressBook,
        first_name: &str,
        last_name: &str,
    ) -> WorkflowResult<bool> {
        let info = match PersonalInfo::new(first_name, last_name) {
            Ok(info) => info,
            Err(_) => return self.fail(WorkflowError::MissingPersonalInfo),
        };

        let selected_id = match self.selected_id.as_deref() {
            Some(id) if !self.search_results.is_empty() => id,
            _ => return self.fail(WorkflowError::NoSelection),
        };

        let candidate = match self
            .search_results
            .iter()
            .find(|candidate| candidate.id == selected_id)
        {
            Some(candidate) => candidate.clone(),
            None => return self.fail(WorkflowError::SelectionNotFound),
        };

        let inserted =
            book.insert(candidate.with_personal_info(info.first_name(), info.last_name()));
        self.error = None;
        Ok(inserted)
    }

    /// Records `err` as the user-facing error and returns it.
    pub fn fail<T>(&mut self, err: WorkflowError) -> WorkflowResult<T> {
        self.error = Some(err.to_string());
        Err(err)
    }

    /// Clears results, selection and error. The loading flag belongs to any in-flight
    /// lookup and is left alone.
    pub fn clear(&mut self) {
        self.search_results.clear();
        self.selected_id = None;
        self.error = None;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
