pub mod database_service;
pub mod membership;
pub mod oauth_account;
pub mod reporter_account;
pub mod user;
