use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default)]
pub struct DBReporterAccountCreate {
    pub account: String,
    pub password: String,
    pub active: bool,
    pub activate_token: String,
    pub act_exp_time: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct RSignIn {
    #[validate(email)]
    pub email: String,
    pub destination: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignInRes {
    pub email: String,
    pub destination: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RActivate {
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    /// First sign-in for this email: user and account were created.
    Created,
    /// Account already existed; only the activation token changed.
    Refreshed,
}
