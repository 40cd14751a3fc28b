//! Organization guard.
//!
//! Caller identity verification and organizational membership live
//! outside the core: the runtime hands us a verified caller account,
//! and the contract boundary resolves it to an [`Organization`] tag.
//! Workflows only ever see the closed enum.

use near_sdk::near;

use crate::errors::RegnetError;

#[near(serializers = [json])]
#[serde(rename_all = "lowercase")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Organization {
    Users,
    Registrar,
}

impl std::fmt::Display for Organization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Users => "users",
            Self::Registrar => "registrar",
        })
    }
}

/// Applied at the start of every mutating workflow, before any read or
/// write.
pub(crate) fn require_org(
    caller_org: Organization,
    expected: Organization,
) -> Result<(), RegnetError> {
    if caller_org != expected {
        return Err(RegnetError::wrong_organization(expected));
    }
    Ok(())
}
