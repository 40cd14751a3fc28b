//! Property registration network — user accounts and property assets in a
//! composite-keyed ledger record store, mutated only through org-gated,
//! validate-then-write workflow operations.
//!
//! The runtime supplies what the core deliberately leaves out: it
//! serializes whole invocations (a method call commits all of its writes
//! or, on error, none) and verifies the caller identity. The contract
//! boundary resolves that identity to an organization tag via the
//! registrar membership set; everything below works on typed records,
//! typed keys, and a closed organization enum.

use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::json_types::U128;
use near_sdk::store::IterableSet;
use near_sdk::{env, near, AccountId, BorshStorageKey, PanicOnDefault};

// --- Modules ---

pub mod auth;
mod context;
pub mod errors;
mod events;
pub mod models;
mod registrar_ops;
mod repository;
pub mod store;
mod user_ops;

pub use auth::Organization;
pub use errors::RegnetError;
pub use models::{
    PropertyAsset, PropertyRegistrationRequest, PropertyStatus, UserAccount, UserKey,
    UserRegistrationRequest,
};

use context::OpContext;
use repository::Repository;

// --- Storage Keys ---

#[derive(BorshSerialize, BorshDeserialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
enum StorageKey {
    Registrars,
}

// --- Contract State ---

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml.
    pub version: String,
    pub manager: AccountId,
    /// Accounts belonging to the registrar organization; every other
    /// caller belongs to the users organization.
    pub registrars: IterableSet<AccountId>,
}

#[near]
impl Contract {
    #[init]
    pub fn new(registrars: Vec<AccountId>) -> Self {
        let mut set = IterableSet::new(StorageKey::Registrars);
        for account_id in registrars {
            set.insert(account_id);
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            manager: env::predecessor_account_id(),
            registrars: set,
        }
    }

    // ── Registrar membership (boundary adapter) ──────────────────────

    #[handle_result]
    pub fn add_registrar(&mut self, account_id: AccountId) -> Result<(), RegnetError> {
        self.require_manager()?;
        self.registrars.insert(account_id);
        Ok(())
    }

    #[handle_result]
    pub fn remove_registrar(&mut self, account_id: AccountId) -> Result<(), RegnetError> {
        self.require_manager()?;
        self.registrars.remove(&account_id);
        Ok(())
    }

    pub fn is_registrar(&self, account_id: AccountId) -> bool {
        self.registrars.contains(&account_id)
    }

    // ── Users organization operations ────────────────────────────────

    #[handle_result]
    pub fn request_new_user(
        &mut self,
        name: String,
        email: String,
        phone: String,
        national_id: String,
    ) -> Result<UserRegistrationRequest, RegnetError> {
        self.op_context().request_new_user(name, email, phone, national_id)
    }

    #[handle_result]
    pub fn recharge_account(
        &mut self,
        name: String,
        national_id: String,
        bank_transaction_id: String,
    ) -> Result<UserAccount, RegnetError> {
        self.op_context().recharge_account(name, national_id, bank_transaction_id)
    }

    #[handle_result]
    pub fn request_property_registration(
        &mut self,
        property_id: String,
        price: U128,
        name: String,
        national_id: String,
    ) -> Result<PropertyRegistrationRequest, RegnetError> {
        self.op_context()
            .request_property_registration(property_id, price.0, name, national_id)
    }

    #[handle_result]
    pub fn update_property_status(
        &mut self,
        property_id: String,
        name: String,
        national_id: String,
        status: PropertyStatus,
    ) -> Result<PropertyAsset, RegnetError> {
        self.op_context()
            .update_property_status(property_id, name, national_id, status)
    }

    #[handle_result]
    pub fn purchase_property(
        &mut self,
        property_id: String,
        buyer_name: String,
        buyer_national_id: String,
    ) -> Result<PropertyAsset, RegnetError> {
        self.op_context()
            .purchase_property(property_id, buyer_name, buyer_national_id)
    }

    // ── Registrar organization operations ────────────────────────────

    #[handle_result]
    pub fn approve_new_user(
        &mut self,
        name: String,
        national_id: String,
    ) -> Result<UserAccount, RegnetError> {
        self.op_context().approve_new_user(name, national_id)
    }

    #[handle_result]
    pub fn approve_property_registration(
        &mut self,
        property_id: String,
    ) -> Result<PropertyAsset, RegnetError> {
        self.op_context().approve_property_registration(property_id)
    }

    // ── Views ────────────────────────────────────────────────────────

    /// Explicitly `None` when no such user exists; an error only for a
    /// record that exists but cannot be decoded.
    #[handle_result]
    pub fn view_user(
        &self,
        name: String,
        national_id: String,
    ) -> Result<Option<UserAccount>, RegnetError> {
        Repository::<UserAccount>::new().get(UserAccount::make_key(&name, &national_id).as_str())
    }

    /// Explicitly `None` when no such property exists.
    #[handle_result]
    pub fn view_property(&self, property_id: String) -> Result<Option<PropertyAsset>, RegnetError> {
        Repository::<PropertyAsset>::new().get(&PropertyAsset::make_key(&property_id))
    }
}

impl Contract {
    /// Builds the request-scoped context for one invocation.
    fn op_context(&self) -> OpContext {
        let caller = env::predecessor_account_id();
        let caller_org = if self.registrars.contains(&caller) {
            Organization::Registrar
        } else {
            Organization::Users
        };
        OpContext::new(caller, caller_org, env::block_timestamp_ms())
    }

    fn require_manager(&self) -> Result<(), RegnetError> {
        if env::predecessor_account_id() != self.manager {
            return Err(RegnetError::Unauthorized(
                "Only the contract manager can administer registrar membership".into(),
            ));
        }
        Ok(())
    }
}
