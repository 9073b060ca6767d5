use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{DbErr, EntityTrait};
use tracing::info;

impl DatabaseService {
    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        info!(user_id = id, "Getting user by id");
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }
}
