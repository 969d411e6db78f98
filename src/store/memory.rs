use super::types::{Record, StoreError};
use crate::media::accept::accept_allows;
use crate::media::classifier::{MediaClass, classify};

use bytes::Bytes;
use dashmap::DashMap;

/// Concurrent in-memory key→record store.
///
/// The map is the only shared mutable state in the system. Same-key
/// operations are linearizable: `set` replaces the whole record under the
/// shard lock, and `get` clones the record out under that same lock, so a
/// reader never sees the bytes of one write paired with the media type of
/// another. Operations on different keys proceed independently.
#[derive(Default)]
pub struct KeyValueStore {
    records: DashMap<String, Record>,
}

impl KeyValueStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `key` and checks the stored media type against the client's
    /// `Accept` header.
    ///
    /// Returns the full record on a compatible hit, `NotFound` for an absent
    /// key, and `NotAcceptable` when a record exists but its type satisfies
    /// none of the accept patterns.
    pub fn get(&self, key: &str, accept: Option<&str>) -> Result<Record, StoreError> {
        let record = match self.records.get(key) {
            Some(entry) => entry.value().clone(),
            None => return Err(StoreError::NotFound(key.to_string())),
        };

        if !accept_allows(accept, &record.content_type) {
            return Err(StoreError::NotAcceptable {
                stored: record.content_type,
                requested: accept.unwrap_or_default().trim().to_string(),
            });
        }

        Ok(record)
    }

    /// Classifies `content_type` and, if it is specific, installs a new
    /// record for `key`, replacing any prior record in full.
    ///
    /// Generic and malformed declarations are rejected without touching the
    /// map, so a failed write leaves any pre-existing record intact.
    pub fn set(
        &self,
        key: &str,
        content_type: Option<&str>,
        payload: Bytes,
    ) -> Result<(), StoreError> {
        let stored_type = match classify(content_type) {
            MediaClass::Specific(media_type) => media_type,
            MediaClass::Generic => {
                return Err(StoreError::GenericMediaType(essence_text(content_type)));
            }
            MediaClass::Malformed => return Err(StoreError::MalformedMediaType),
        };

        self.records.insert(
            key.to_string(),
            Record {
                content_type: stored_type,
                payload,
            },
        );
        Ok(())
    }

    /// Number of stored records, for stats reporting.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// The rejected declaration as the client wrote it, minus parameters, for
// error messages.
fn essence_text(header: Option<&str>) -> String {
    header
        .unwrap_or_default()
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
