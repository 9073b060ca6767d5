use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Privilege granted to every freshly created user.
pub const PRIVILEGE_REGISTERED: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub privilege: i32,
    pub registration_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::oauth_account::Entity")]
    OAuthAccount,
    #[sea_orm(has_one = "super::reporter_account::Entity")]
    ReporterAccount,
}

impl Related<super::oauth_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OAuthAccount.def()
    }
}

impl Related<super::reporter_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReporterAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
