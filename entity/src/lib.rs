pub mod oauth_account;
pub mod reporter_account;
pub mod user;

/*
 A user is the single local identity. It can be reached two ways:
 - one reporter account (email sign-in, activated through a mailed token)
 - any number of oauth accounts, one per (provider type, provider id)
 Both account tables point back at users.id; nothing points the other way.
 */
