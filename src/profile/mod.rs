//! Profile of the logged in user as the backend returns it from `/private/api/me`.

use std::convert::TryFrom;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

mod identity;
pub use identity::{Identity, IdentityRow};

use crate::Result;

/// Provider key of the Google identity provider.
pub const GOOGLE_PROVIDER_ID: &str = "google";

/// Typed view of the profile next to the response body it was decoded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct UserProfile {
    pub id: Option<String>,
    pub email: String,
    // Linked identities in backend order.
    pub identities: Vec<Identity>,
    raw: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileFields {
    #[serde(default)]
    id: Option<String>,
    email: String,
    // Absent or null means none.
    #[serde(default, deserialize_with = "null_as_empty")]
    identities: Vec<Identity>,
}

impl TryFrom<Value> for UserProfile {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let ProfileFields {
            id,
            email,
            identities,
        } = ProfileFields::deserialize(&raw)?;

        Ok(UserProfile {
            id,
            email,
            identities,
            raw,
        })
    }
}

impl From<UserProfile> for Value {
    fn from(profile: UserProfile) -> Self {
        profile.raw
    }
}

impl UserProfile {
    /// Response body as the backend sent it, unknown fields included.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn is_linked(&self, identity_provider_id: &str) -> bool {
        self.identities
            .iter()
            .any(|identity| identity.identity_provider_id == identity_provider_id)
    }

    pub fn google_linked(&self) -> bool {
        self.is_linked(GOOGLE_PROVIDER_ID)
    }

    /// Display records of every linked identity.
    /// Fails on the first identity without an id token.
    pub fn identity_rows(&self) -> Result<Vec<IdentityRow>> {
        self.identities.iter().map(IdentityRow::try_from).collect()
    }
}

/// Whether the profile has a linked Google identity.
pub fn derive_google_linked(profile: &UserProfile) -> bool {
    profile.google_linked()
}

/// Project linked identities into display records.
pub fn project_identities(profile: &UserProfile) -> Result<Vec<IdentityRow>> {
    profile.identity_rows()
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
