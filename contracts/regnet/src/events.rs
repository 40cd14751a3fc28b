use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

use crate::models::{PropertyStatus, UserKey};

#[near(event_json(standard = "nep297"))]
pub enum RegnetEvent {
    #[event_version("1.0.0")]
    UserRegistrationRequested { name: String, national_id: String, requested_by: AccountId },
    #[event_version("1.0.0")]
    UserApproved { name: String, national_id: String, approved_by: AccountId },
    #[event_version("1.0.0")]
    AccountRecharged { name: String, national_id: String, amount: U128, balance: U128 },
    #[event_version("1.0.0")]
    PropertyRegistrationRequested { property_id: String, owner: UserKey, requested_by: AccountId },
    #[event_version("1.0.0")]
    PropertyApproved { property_id: String, owner: UserKey, approved_by: AccountId },
    #[event_version("1.0.0")]
    PropertyStatusUpdated { property_id: String, status: PropertyStatus },
    #[event_version("1.0.0")]
    PropertyPurchased { property_id: String, seller: UserKey, buyer: UserKey, price: U128 },
}
