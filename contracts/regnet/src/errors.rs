//! Typed error handling for the regnet contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(RegnetError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message, reverting every write the invocation made — so a
//! failed operation leaves zero partial state.

use near_sdk_macros::NearSchema;

use crate::auth::Organization;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum RegnetError {
    /// Wrong organization, or a non-owner mutating a property.
    Unauthorized(String),
    /// Referenced entity absent from the ledger.
    NotFound(String),
    /// Entity already exists where it must not.
    Conflict(String),
    /// Invalid parameters from the caller.
    InvalidInput(String),
    /// Property exists but is not listed for sale.
    NotForSale(String),
    /// Buyer balance below the property price.
    InsufficientFunds(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for RegnetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotForSale(msg) => write!(f, "Not for sale: {}", msg),
            Self::InsufficientFunds(msg) => write!(f, "Insufficient funds: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl RegnetError {
    pub fn user_not_found() -> Self {
        Self::NotFound("User does not exist".into())
    }
    pub fn user_request_not_found() -> Self {
        Self::NotFound("User registration request does not exist".into())
    }
    pub fn property_not_found() -> Self {
        Self::NotFound("Property does not exist".into())
    }
    pub fn property_request_not_found() -> Self {
        Self::NotFound("Property registration request does not exist".into())
    }
    pub fn user_already_approved() -> Self {
        Self::Conflict("User already approved".into())
    }
    pub fn user_request_exists() -> Self {
        Self::Conflict("User registration request already exists".into())
    }
    pub fn property_already_approved() -> Self {
        Self::Conflict("Property already approved".into())
    }
    pub fn property_request_exists() -> Self {
        Self::Conflict("Property registration request already exists".into())
    }
    pub fn wrong_organization(expected: Organization) -> Self {
        Self::Unauthorized(format!(
            "Only members of the {} organization can invoke this operation",
            expected
        ))
    }
    pub fn only_owner() -> Self {
        Self::Unauthorized("Only the owner of the property can update it".into())
    }
    pub fn not_for_sale() -> Self {
        Self::NotForSale("Property is not listed for sale".into())
    }
    pub fn insufficient_funds(price: u128, balance: u128) -> Self {
        Self::InsufficientFunds(format!(
            "Balance {} is below the property price {}",
            balance, price
        ))
    }
    pub fn unknown_transaction_id(tx_id: &str) -> Self {
        Self::InvalidInput(format!("Unrecognized bank transaction id: {}", tx_id))
    }
}
