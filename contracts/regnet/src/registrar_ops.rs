//! Workflow operations invoked by the registrar organization.
//!
//! Approvals promote a pending request into its approved record,
//! copying identifying and descriptive fields and adding approval
//! metadata. The request itself stays on the ledger.

use crate::auth::{require_org, Organization};
use crate::context::OpContext;
use crate::errors::RegnetError;
use crate::events::RegnetEvent;
use crate::models::{PropertyAsset, PropertyStatus, UserAccount};

impl OpContext {
    /// Promotes a pending user registration request into an account
    /// with a zero balance.
    pub fn approve_new_user(
        &self,
        name: String,
        national_id: String,
    ) -> Result<UserAccount, RegnetError> {
        require_org(self.caller_org, Organization::Registrar)?;

        let key = UserAccount::make_key(&name, &national_id);
        if self.users.get(key.as_str())?.is_some() {
            return Err(RegnetError::user_already_approved());
        }
        let request = self
            .user_requests
            .get(key.as_str())?
            .ok_or_else(RegnetError::user_request_not_found)?;

        let account = UserAccount {
            name: request.name,
            email: request.email,
            phone: request.phone,
            national_id: request.national_id,
            approved_by: self.caller.clone(),
            balance: 0,
            created_at: request.created_at,
            updated_at: self.now_ms,
        };
        self.users.add(&account)?;

        RegnetEvent::UserApproved {
            name: account.name.clone(),
            national_id: account.national_id.clone(),
            approved_by: account.approved_by.clone(),
        }
        .emit();

        Ok(account)
    }

    /// Promotes a pending property registration request into a
    /// registered asset owned by the requester.
    pub fn approve_property_registration(
        &self,
        property_id: String,
    ) -> Result<PropertyAsset, RegnetError> {
        require_org(self.caller_org, Organization::Registrar)?;

        let key = PropertyAsset::make_key(&property_id);
        if self.properties.get(&key)?.is_some() {
            return Err(RegnetError::property_already_approved());
        }
        let request = self
            .property_requests
            .get(&key)?
            .ok_or_else(RegnetError::property_request_not_found)?;

        let property = PropertyAsset {
            property_id: request.property_id,
            price: request.price,
            owner: request.owner,
            status: PropertyStatus::Registered,
            approved_by: self.caller.clone(),
            created_at: request.created_at,
            updated_at: self.now_ms,
        };
        self.properties.add(&property)?;

        RegnetEvent::PropertyApproved {
            property_id: property.property_id.clone(),
            owner: property.owner.clone(),
            approved_by: property.approved_by.clone(),
        }
        .emit();

        Ok(property)
    }
}
