use serde::{Deserialize, Serialize};

/// Profile handed back by an OAuth provider after the token exchange.
///
/// `kind` + `external_id` identify the account; everything else is refreshed
/// on each login.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OAuthProfile {
    pub kind: String,
    pub external_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub picture: Option<String>,
}
