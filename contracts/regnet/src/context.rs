//! Request-scoped operation context.

use near_sdk::AccountId;

use crate::auth::Organization;
use crate::models::{
    PropertyAsset, PropertyRegistrationRequest, UserAccount, UserRegistrationRequest,
};
use crate::repository::Repository;

/// Everything a workflow needs for one invocation: the four typed
/// repositories plus the verified caller identity, its organization,
/// and the invocation timestamp. Built fresh per call; holds no state
/// across invocations.
pub(crate) struct OpContext {
    pub caller: AccountId,
    pub caller_org: Organization,
    /// Milliseconds since epoch for this invocation.
    pub now_ms: u64,
    pub users: Repository<UserAccount>,
    pub user_requests: Repository<UserRegistrationRequest>,
    pub properties: Repository<PropertyAsset>,
    pub property_requests: Repository<PropertyRegistrationRequest>,
}

impl OpContext {
    pub fn new(caller: AccountId, caller_org: Organization, now_ms: u64) -> Self {
        Self {
            caller,
            caller_org,
            now_ms,
            users: Repository::new(),
            user_requests: Repository::new(),
            properties: Repository::new(),
            property_requests: Repository::new(),
        }
    }
}
