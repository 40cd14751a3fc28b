//! Workflow operations invoked by the users organization.
//!
//! Every mutation follows guard → read → validate → write: all
//! preconditions are checked against freshly read ledger state before
//! the first write, so a failing operation performs zero writes.

use near_sdk::json_types::U128;

use crate::auth::{require_org, Organization};
use crate::context::OpContext;
use crate::errors::RegnetError;
use crate::events::RegnetEvent;
use crate::models::{
    PropertyAsset, PropertyRegistrationRequest, PropertyStatus, UserAccount,
    UserRegistrationRequest,
};

/// Recognized bank transaction ids and the coin amount each credits.
const RECHARGE_TABLE: [(&str, u128); 3] = [("upg100", 100), ("upg500", 500), ("upg1000", 1000)];

fn recharge_amount(tx_id: &str) -> Option<u128> {
    RECHARGE_TABLE
        .iter()
        .find(|(id, _)| *id == tx_id)
        .map(|(_, amount)| *amount)
}

impl OpContext {
    /// Raises a registration request for a new user. Fails if the user
    /// is already approved or a request is already pending.
    pub fn request_new_user(
        &self,
        name: String,
        email: String,
        phone: String,
        national_id: String,
    ) -> Result<UserRegistrationRequest, RegnetError> {
        require_org(self.caller_org, Organization::Users)?;

        if name.is_empty() || national_id.is_empty() {
            return Err(RegnetError::InvalidInput(
                "Name and national id must be non-empty".into(),
            ));
        }

        let key = UserAccount::make_key(&name, &national_id);
        if self.users.get(key.as_str())?.is_some() {
            return Err(RegnetError::user_already_approved());
        }
        if self.user_requests.get(key.as_str())?.is_some() {
            return Err(RegnetError::user_request_exists());
        }

        let request = UserRegistrationRequest {
            name,
            email,
            phone,
            national_id,
            requested_by: self.caller.clone(),
            created_at: self.now_ms,
        };
        self.user_requests.add(&request)?;

        RegnetEvent::UserRegistrationRequested {
            name: request.name.clone(),
            national_id: request.national_id.clone(),
            requested_by: request.requested_by.clone(),
        }
        .emit();

        Ok(request)
    }

    /// Credits the account with the coin amount mapped to a recognized
    /// bank transaction id.
    pub fn recharge_account(
        &self,
        name: String,
        national_id: String,
        bank_transaction_id: String,
    ) -> Result<UserAccount, RegnetError> {
        require_org(self.caller_org, Organization::Users)?;

        let key = UserAccount::make_key(&name, &national_id);
        let mut account = self
            .users
            .get(key.as_str())?
            .ok_or_else(RegnetError::user_not_found)?;
        let amount = recharge_amount(&bank_transaction_id)
            .ok_or_else(|| RegnetError::unknown_transaction_id(&bank_transaction_id))?;

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| RegnetError::InternalError("Balance overflow".into()))?;
        account.updated_at = self.now_ms;
        self.users.update(&account)?;

        RegnetEvent::AccountRecharged {
            name: account.name.clone(),
            national_id: account.national_id.clone(),
            amount: U128(amount),
            balance: U128(account.balance),
        }
        .emit();

        Ok(account)
    }

    /// Raises a registration request for a property owned by an
    /// approved user. Fails if the property or a request for it
    /// already exists.
    pub fn request_property_registration(
        &self,
        property_id: String,
        price: u128,
        name: String,
        national_id: String,
    ) -> Result<PropertyRegistrationRequest, RegnetError> {
        require_org(self.caller_org, Organization::Users)?;

        if property_id.is_empty() {
            return Err(RegnetError::InvalidInput("Property id must be non-empty".into()));
        }
        if price == 0 {
            return Err(RegnetError::InvalidInput(
                "Price must be a positive number of coins".into(),
            ));
        }

        let owner = UserAccount::make_key(&name, &national_id);
        if self.users.get(owner.as_str())?.is_none() {
            return Err(RegnetError::user_not_found());
        }
        let property_key = PropertyAsset::make_key(&property_id);
        if self.properties.get(&property_key)?.is_some() {
            return Err(RegnetError::property_already_approved());
        }
        if self.property_requests.get(&property_key)?.is_some() {
            return Err(RegnetError::property_request_exists());
        }

        let request = PropertyRegistrationRequest {
            property_id,
            price,
            owner,
            requested_by: self.caller.clone(),
            created_at: self.now_ms,
        };
        self.property_requests.add(&request)?;

        RegnetEvent::PropertyRegistrationRequested {
            property_id: request.property_id.clone(),
            owner: request.owner.clone(),
            requested_by: request.requested_by.clone(),
        }
        .emit();

        Ok(request)
    }

    /// Sets the listing status of a property. Only the owner may
    /// update; repeating the same status only refreshes `updated_at`.
    pub fn update_property_status(
        &self,
        property_id: String,
        name: String,
        national_id: String,
        status: PropertyStatus,
    ) -> Result<PropertyAsset, RegnetError> {
        require_org(self.caller_org, Organization::Users)?;

        let caller_key = UserAccount::make_key(&name, &national_id);
        if self.users.get(caller_key.as_str())?.is_none() {
            return Err(RegnetError::user_not_found());
        }
        let mut property = self
            .properties
            .get(&PropertyAsset::make_key(&property_id))?
            .ok_or_else(RegnetError::property_not_found)?;
        if property.owner != caller_key {
            return Err(RegnetError::only_owner());
        }

        property.status = status;
        property.updated_at = self.now_ms;
        self.properties.update(&property)?;

        RegnetEvent::PropertyStatusUpdated {
            property_id: property.property_id.clone(),
            status: property.status,
        }
        .emit();

        Ok(property)
    }

    /// Transfers a listed property to the buyer against their coin
    /// balance. Reads and validates all three records (seller, buyer,
    /// property) before the first write; the runtime commits the three
    /// writes atomically with the invocation.
    pub fn purchase_property(
        &self,
        property_id: String,
        buyer_name: String,
        buyer_national_id: String,
    ) -> Result<PropertyAsset, RegnetError> {
        require_org(self.caller_org, Organization::Users)?;

        let buyer_key = UserAccount::make_key(&buyer_name, &buyer_national_id);
        let mut buyer = self
            .users
            .get(buyer_key.as_str())?
            .ok_or_else(|| RegnetError::NotFound("Buyer does not exist".into()))?;
        let mut property = self
            .properties
            .get(&PropertyAsset::make_key(&property_id))?
            .ok_or_else(RegnetError::property_not_found)?;
        if property.status != PropertyStatus::OnSale {
            return Err(RegnetError::not_for_sale());
        }
        if property.owner == buyer_key {
            return Err(RegnetError::InvalidInput(
                "Owner cannot purchase their own property".into(),
            ));
        }
        let mut seller = self
            .users
            .get(property.owner.as_str())?
            .ok_or_else(|| RegnetError::NotFound("Seller does not exist".into()))?;
        if buyer.balance < property.price {
            return Err(RegnetError::insufficient_funds(property.price, buyer.balance));
        }

        seller.balance = seller
            .balance
            .checked_add(property.price)
            .ok_or_else(|| RegnetError::InternalError("Balance overflow".into()))?;
        seller.updated_at = self.now_ms;
        // Cannot underflow: checked against the price above.
        buyer.balance -= property.price;
        buyer.updated_at = self.now_ms;
        property.owner = buyer_key;
        property.status = PropertyStatus::Registered;
        property.updated_at = self.now_ms;

        // Write order: seller, buyer, property.
        self.users.update(&seller)?;
        self.users.update(&buyer)?;
        self.properties.update(&property)?;

        RegnetEvent::PropertyPurchased {
            property_id: property.property_id.clone(),
            seller: seller.key(),
            buyer: buyer.key(),
            price: U128(property.price),
        }
        .emit();

        Ok(property)
    }
}
