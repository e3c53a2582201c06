//! Workflow orchestrator for one address book session.
//!
//! Coordinates validation, the asynchronous lookup, candidate deduplication, selection and
//! committing entries into the book. All state lives in one [`Workflow`] value owned by the
//! session; methods take `&self` so the state stays readable while a lookup is in flight.
//!
//! ## Sequencing
//!
//! ```text
//! Idle --search(valid)--> Searching --ok--> Results --select--> Selected
//!                             |                                  |
//!                             +--not found / transport--> Idle   +--commit--> Selected (book updated)
//! any --clear_all--> Idle (book kept)
//! ```
//!
//! `loading` is set before the lookup is dispatched and cleared on every outcome, including
//! the lookup future being dropped or panicking. A search submitted while another is in
//! flight is refused with [`WorkflowError::Busy`].

use crate::book::AddressBook;
use crate::constants::{FIELD_FIRST_NAME, FIELD_HOUSE_NUMBER, FIELD_LAST_NAME, FIELD_POSTCODE};
use crate::form::FormFields;
use crate::lookup::AddressLookup;
use crate::state::{Phase, WorkflowState};
use crate::validation::validate_lookup;
use crate::{WorkflowError, WorkflowResult};
use api_shared::Address;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone)]
struct Session {
    fields: FormFields,
    state: WorkflowState,
    book: AddressBook,
}

/// A point-in-time copy of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSnapshot {
    pub fields: FormFields,
    pub state: WorkflowState,
    pub book: AddressBook,
}

/// Orchestrates the lookup-validate-dedup-merge workflow for one session.
pub struct Workflow<L> {
    lookup: L,
    session: Mutex<Session>,
}

/// Clears the loading flag if a search ends without reaching `finish_search`.
struct LoadingGuard<'a> {
    session: &'a Mutex<Session>,
    armed: bool,
}

impl LoadingGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            lock(self.session).state.set_loading(false);
        }
    }
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

fn initial_fields() -> FormFields {
    FormFields::new([
        (FIELD_POSTCODE, ""),
        (FIELD_HOUSE_NUMBER, ""),
        (FIELD_FIRST_NAME, ""),
        (FIELD_LAST_NAME, ""),
    ])
}

impl<L: AddressLookup> Workflow<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            session: Mutex::new(Session {
                fields: initial_fields(),
                state: WorkflowState::new(),
                book: AddressBook::new(),
            }),
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }

    /// Validates the input, looks up candidates and stores the deduplicated results.
    ///
    /// Returns the number of candidates kept. Invalid input never reaches the lookup.
    ///
    /// # Errors
    ///
    /// - [`WorkflowError::Busy`] if a search is already in flight; only `error` is updated,
    ///   results and fields stay with the in-flight search
    /// - [`WorkflowError::Validation`] for malformed postcode or house number
    /// - [`WorkflowError::NotFound`] or [`WorkflowError::Transport`] from the lookup
    pub async fn submit_search(&self, postcode: &str, house_number: &str) -> WorkflowResult<usize> {
        {
            let mut session = self.session();
            if session.state.loading() {
                tracing::debug!("search refused: another lookup is in flight");
                return session.state.fail(WorkflowError::Busy);
            }

            session.fields.set(FIELD_POSTCODE, postcode);
            session.fields.set(FIELD_HOUSE_NUMBER, house_number);

            if let Err(err) = validate_lookup(Some(postcode), Some(house_number)) {
                tracing::debug!(%err, "search input rejected");
                return session.state.fail(err.into());
            }

            session.state.begin_search();
        }

        let guard = LoadingGuard {
            session: &self.session,
            armed: true,
        };

        tracing::debug!(postcode, house_number, "dispatching address lookup");
        let outcome = self
            .lookup
            .lookup(postcode, house_number)
            .await
            .map_err(WorkflowError::from);

        if let Err(err) = &outcome {
            tracing::warn!(?err, postcode, house_number, "address lookup failed");
        }

        let mut session = self.session();
        guard.disarm();
        session.state.finish_search(outcome, house_number)
    }

    /// Selects a candidate from the current results. Unknown ids are ignored.
    pub fn select_candidate(&self, id: &str) -> bool {
        self.session().state.select(id)
    }

    /// Merges personal details into the selected candidate and adds it to the book.
    ///
    /// Returns `true` if a new entry was added, `false` if the book already held an entry
    /// with that id.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::MissingPersonalInfo`], [`WorkflowError::NoSelection`] or
    /// [`WorkflowError::SelectionNotFound`]; the book is unchanged on error.
    pub fn submit_personal_info(&self, first_name: &str, last_name: &str) -> WorkflowResult<bool> {
        let mut session = self.session();
        let Session {
            fields,
            state,
            book,
        } = &mut *session;

        fields.set(FIELD_FIRST_NAME, first_name);
        fields.set(FIELD_LAST_NAME, last_name);

        let inserted = state.commit(book, first_name, last_name)?;
        if inserted {
            tracing::info!(
                id = state.selected_id().unwrap_or_default(),
                entries = book.len(),
                "address added to book"
            );
        } else {
            tracing::debug!("address already in book, kept existing entry");
        }
        Ok(inserted)
    }

    /// Resets fields, results, selection and error. The book is kept.
    pub fn clear_all(&self) {
        let mut session = self.session();
        session.fields.reset();
        session.state.clear();
    }

    /// Removes a book entry by id.
    pub fn remove_from_book(&self, id: &str) -> bool {
        self.session().book.remove(id)
    }

    pub fn loading(&self) -> bool {
        self.session().state.loading()
    }

    pub fn search_results(&self) -> Vec<Address> {
        self.session().state.search_results().to_vec()
    }

    pub fn selected_id(&self) -> Option<String> {
        self.session().state.selected_id().map(str::to_owned)
    }

    pub fn error(&self) -> Option<String> {
        self.session().state.error().map(str::to_owned)
    }

    pub fn book(&self) -> Vec<Address> {
        self.session().book.entries().to_vec()
    }

    pub fn fields(&self) -> FormFields {
        self.session().fields.clone()
    }

    pub fn phase(&self) -> Phase {
        self.session().state.phase()
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        let session = self.session();
        WorkflowSnapshot {
            fields: session.fields.clone(),
            state: session.state.clone(),
            book: session.book.clone(),
        }
    }
}
