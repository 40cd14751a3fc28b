//! Typed repositories over the keyed record store.

use std::marker::PhantomData;

use crate::errors::RegnetError;
use crate::models::LedgerRecord;
use crate::store::{self, LedgerKey};

/// One repository per entity type, scoped to `T::NAMESPACE`.
///
/// `add` and `update` are both storage-level upserts; the distinction
/// is enforced by the workflows, which check existence before either
/// is invoked, never here.
pub(crate) struct Repository<T: LedgerRecord> {
    _marker: PhantomData<T>,
}

impl<T: LedgerRecord> Repository<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// `Ok(None)` when no record exists under `model_key`. `Err` only
    /// for a record that exists but cannot be decoded — absence and
    /// storage corruption are never conflated.
    pub fn get(&self, model_key: &str) -> Result<Option<T>, RegnetError> {
        let key = LedgerKey::new(T::NAMESPACE, model_key);
        match store::read(&key) {
            Some(bytes) => Ok(Some(T::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn add(&self, record: &T) -> Result<(), RegnetError> {
        store::write(&record.ledger_key(), &record.encode()?);
        Ok(())
    }

    pub fn update(&self, record: &T) -> Result<(), RegnetError> {
        store::write(&record.ledger_key(), &record.encode()?);
        Ok(())
    }
}
