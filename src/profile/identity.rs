use std::convert::TryFrom;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, ErrorKind};

/// External provider account linked to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub identity_provider_id: String,
    // Subject identifier assigned by the provider.
    pub external_id: String,
    // Claims of the last id token the provider issued, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_recent_id_token: Option<Value>,
}

impl Identity {
    /// `email` claim of the most recent id token, if it is a string.
    pub fn id_token_email(&self) -> Option<&str> {
        self.most_recent_id_token
            .as_ref()
            .and_then(|claims| claims.get("email"))
            .and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRow {
    pub identity_provider_id: String,
    pub external_id: String,
    pub email: Option<String>,
}

impl TryFrom<&Identity> for IdentityRow {
    type Error = Error;

    fn try_from(identity: &Identity) -> Result<Self, Self::Error> {
        if identity.most_recent_id_token.is_none() {
            return Err(ErrorKind::MissingIdToken {
                identity_provider_id: identity.identity_provider_id.clone(),
                external_id: identity.external_id.clone(),
            }
            .into());
        }

        Ok(IdentityRow {
            identity_provider_id: identity.identity_provider_id.clone(),
            external_id: identity.external_id.clone(),
            email: identity.id_token_email().map(str::to_owned),
        })
    }
}
