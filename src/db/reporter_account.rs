use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, reporter_account::DBReporterAccountCreate};
use chrono::{DateTime, Utc};
use entity::reporter_account::{
    ActiveModel as ReporterActive, Column as ReporterColumn, Entity as ReporterAccount,
    Model as ReporterModel,
};
use entity::user::{
    ActiveModel as UserActive, Entity as User, Model as UserModel, PRIVILEGE_REGISTERED,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::info;

impl DatabaseService {
    pub async fn get_reporter_account_data(&self, email: &str) -> Result<ReporterModel, AppError> {
        info!(email, "Getting the matching reporter account data");
        Ok(ReporterAccount::find()
            .filter(ReporterColumn::Account.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Reporter account not found".into()))?)
    }

    pub async fn get_user_data_by_reporter_account(
        &self,
        account: &ReporterModel,
    ) -> Result<UserModel, AppError> {
        info!(user_id = account.user_id, "Getting the matching user data by reporter account");
        Ok(User::find_by_id(account.user_id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: create user + reporter account in one transaction.
    /// The user's email is the account identifier.
    pub async fn insert_user_by_reporter_account(
        &self,
        payload: DBReporterAccountCreate,
    ) -> Result<UserModel, AppError> {
        info!(account = %payload.account, active = payload.active, "Inserting user by reporter account");
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let user = UserActive {
            email: Set(Some(payload.account.clone())),
            privilege: Set(PRIVILEGE_REGISTERED),
            registration_date: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        ReporterActive {
            user_id: Set(user.id),
            account: Set(payload.account),
            password: Set(payload.password),
            active: Set(payload.active),
            activate_token: Set(payload.activate_token),
            act_exp_time: Set(payload.act_exp_time),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(user)
    }

    pub async fn update_reporter_account_password(
        &self,
        account: ReporterModel,
        password: String,
    ) -> Result<ReporterModel, AppError> {
        let mut am: ReporterActive = account.into();
        am.password = Set(password);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn update_reporter_account_active(
        &self,
        account: ReporterModel,
        active: bool,
    ) -> Result<ReporterModel, AppError> {
        let mut am: ReporterActive = account.into();
        am.active = Set(active);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn update_reporter_account_activation(
        &self,
        account: ReporterModel,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<ReporterModel, AppError> {
        let mut am: ReporterActive = account.into();
        am.activate_token = Set(token_hash);
        am.act_exp_time = Set(Some(expires_at));
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    /// Activates the account and consumes its activation token in one update.
    pub async fn mark_reporter_account_activated(
        &self,
        account: ReporterModel,
    ) -> Result<ReporterModel, AppError> {
        let mut am: ReporterActive = account.into();
        am.active = Set(true);
        am.activate_token = Set(String::new());
        am.act_exp_time = Set(None);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }
}
