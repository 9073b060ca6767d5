pub mod error;
pub mod oauth;
pub mod reporter_account;
pub mod response;
pub mod search;
pub mod user;
