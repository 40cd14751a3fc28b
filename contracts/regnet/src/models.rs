//! Ledger entity models.
//!
//! Four record types share one discipline: a deterministic key derived
//! from identifying fields only, and a JSON byte encoding that
//! round-trips exactly. Registration requests are never deleted on
//! approval; they stay on the ledger as audit records with lifecycles
//! independent of the account or asset they were promoted into.

use near_sdk::serde::de::DeserializeOwned;
use near_sdk::serde::Serialize;
use near_sdk::{near, serde_json, AccountId};

use crate::errors::RegnetError;
use crate::store::{join_key_parts, LedgerKey};

/// A record stored in the ledger under a namespaced composite key.
pub trait LedgerRecord: Serialize + DeserializeOwned {
    /// Namespace prefix unique to this entity type.
    const NAMESPACE: &'static str;

    /// Identifying field values, in key order, unencoded. Mutable
    /// fields never participate.
    fn key_parts(&self) -> Vec<String>;

    /// Model key: encoded parts joined with the separator.
    fn model_key(&self) -> String {
        let parts = self.key_parts();
        join_key_parts(&parts.iter().map(String::as_str).collect::<Vec<_>>())
    }

    fn ledger_key(&self) -> LedgerKey {
        LedgerKey::new(Self::NAMESPACE, &self.model_key())
    }

    fn encode(&self) -> Result<Vec<u8>, RegnetError> {
        serde_json::to_vec(self)
            .map_err(|e| RegnetError::InternalError(format!("Record encoding failed: {e}")))
    }

    /// A record that exists but cannot be decoded is an internal error,
    /// never reported as absent.
    fn decode(bytes: &[u8]) -> Result<Self, RegnetError> {
        serde_json::from_slice(bytes)
            .map_err(|e| RegnetError::InternalError(format!("Corrupt ledger record: {e}")))
    }
}

/// Typed reference to a user account: the encoded `(name, national_id)`
/// composite without its namespace prefix. This is what property
/// records store as `owner`.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct UserKey(String);

impl UserKey {
    pub fn new(name: &str, national_id: &str) -> Self {
        Self(join_key_parts(&[name, national_id]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[near(serializers = [json])]
#[serde(rename_all = "lowercase")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyStatus {
    Registered,
    OnSale,
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Registered => "registered",
            Self::OnSale => "onsale",
        })
    }
}

/// An approved user account. At most one per `(name, national_id)`;
/// `balance` is a non-negative coin count.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct UserAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub approved_by: AccountId,
    pub balance: u128,
    /// Milliseconds; carried over from the originating request.
    pub created_at: u64,
    pub updated_at: u64,
}

impl UserAccount {
    pub fn make_key(name: &str, national_id: &str) -> UserKey {
        UserKey::new(name, national_id)
    }

    pub fn key(&self) -> UserKey {
        UserKey::new(&self.name, &self.national_id)
    }
}

impl LedgerRecord for UserAccount {
    const NAMESPACE: &'static str = "regnet.users";

    fn key_parts(&self) -> Vec<String> {
        vec![self.name.clone(), self.national_id.clone()]
    }
}

/// A pending request to register a user, raised by the users org and
/// promoted into a [`UserAccount`] by the registrar.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct UserRegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub requested_by: AccountId,
    pub created_at: u64,
}

impl UserRegistrationRequest {
    pub fn make_key(name: &str, national_id: &str) -> UserKey {
        UserKey::new(name, national_id)
    }
}

impl LedgerRecord for UserRegistrationRequest {
    const NAMESPACE: &'static str = "regnet.user-requests";

    fn key_parts(&self) -> Vec<String> {
        vec![self.name.clone(), self.national_id.clone()]
    }
}

/// A registered property. `owner` always references an existing
/// [`UserAccount`]; at most one asset per `property_id`.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyAsset {
    pub property_id: String,
    pub price: u128,
    pub owner: UserKey,
    pub status: PropertyStatus,
    pub approved_by: AccountId,
    pub created_at: u64,
    pub updated_at: u64,
}

impl PropertyAsset {
    pub fn make_key(property_id: &str) -> String {
        join_key_parts(&[property_id])
    }
}

impl LedgerRecord for PropertyAsset {
    const NAMESPACE: &'static str = "regnet.properties";

    fn key_parts(&self) -> Vec<String> {
        vec![self.property_id.clone()]
    }
}

/// A pending request to register a property, promoted into a
/// [`PropertyAsset`] by the registrar.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRegistrationRequest {
    pub property_id: String,
    pub price: u128,
    /// The requester's account key; becomes the asset's first owner.
    pub owner: UserKey,
    pub requested_by: AccountId,
    pub created_at: u64,
}

impl PropertyRegistrationRequest {
    pub fn make_key(property_id: &str) -> String {
        join_key_parts(&[property_id])
    }
}

impl LedgerRecord for PropertyRegistrationRequest {
    const NAMESPACE: &'static str = "regnet.property-requests";

    fn key_parts(&self) -> Vec<String> {
        vec![self.property_id.clone()]
    }
}
