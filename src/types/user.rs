use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRes {
    pub id: i32,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub privilege: i32,
    pub registration_date: DateTime<Utc>,
}

impl From<entity::user::Model> for UserRes {
    fn from(u: entity::user::Model) -> Self {
        UserRes {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            gender: u.gender,
            privilege: u.privilege,
            registration_date: u.registration_date,
        }
    }
}
