//! Session-scoped fetch state.
//!
//! Holds the last assembled (record, cast) pair. The pair is only ever
//! replaced as a whole, never partially updated, so readers always see a
//! consistent fetch result.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::record::{AssembledFilm, CastEntry, FilmRecord};

/// The cached result of the most recent successful fetch.
#[derive(Debug, Clone)]
pub struct FilmSession {
    pub film_id: u64,
    pub fetched_at: DateTime<Utc>,
    pub record: FilmRecord,
    pub cast: Vec<CastEntry>,
}

/// Shared store for the current session pair.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<FilmSession>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was held before with a fresh fetch result.
    pub fn replace(&self, film: AssembledFilm) -> FilmSession {
        let session = FilmSession {
            film_id: film.film_id,
            fetched_at: Utc::now(),
            record: film.record,
            cast: film.cast,
        };
        *self.inner.write() = Some(session.clone());
        session
    }

    /// Current session pair, if a fetch has succeeded.
    pub fn current(&self) -> Option<FilmSession> {
        self.inner.read().clone()
    }
}
