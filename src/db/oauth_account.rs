use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, oauth::OAuthProfile};
use chrono::Utc;
use entity::oauth_account::{
    ActiveModel as OAuthActive, Column as OAuthColumn, Entity as OAuthAccount,
    Model as OAuthModel,
};
use entity::user::{
    ActiveModel as UserActive, Entity as User, Model as UserModel, PRIVILEGE_REGISTERED,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{error, info};

impl DatabaseService {
    /// Newest account matching `(kind, external_id)`.
    ///
    /// The pair is not unique in the schema; when duplicates exist the row with
    /// the highest id wins, so repeated lookups are stable.
    pub async fn get_oauth_data(
        &self,
        external_id: &str,
        kind: &str,
    ) -> Result<OAuthModel, AppError> {
        info!(kind, external_id, "Getting the matching OAuth data");
        let found = OAuthAccount::find()
            .filter(OAuthColumn::Kind.eq(kind))
            .filter(OAuthColumn::AId.eq(external_id))
            .order_by_desc(OAuthColumn::Id)
            .one(&self.database_connection)
            .await
            .inspect_err(|e| error!(error = %e, "select oauth account failed"))?;

        Ok(found.ok_or_else(|| DbErr::RecordNotFound("OAuth account not found".into()))?)
    }

    /// Owner of the account identified by the profile's `(kind, external_id)`.
    pub async fn get_user_data_by_oauth(
        &self,
        profile: &OAuthProfile,
    ) -> Result<UserModel, AppError> {
        let account = self.get_oauth_data(&profile.external_id, &profile.kind).await?;
        info!(user_id = account.user_id, "Getting the matching user data by oauth account");

        Ok(User::find_by_id(account.user_id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Creates a registered user seeded from the provider profile, with the
    /// OAuth account attached. Both rows land in one transaction.
    pub async fn insert_user_by_oauth(&self, profile: OAuthProfile) -> Result<UserModel, AppError> {
        info!(kind = %profile.kind, "Inserting user by oauth account");
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let user = UserActive {
            email: Set(profile.email.clone()),
            first_name: Set(profile.first_name.clone()),
            last_name: Set(profile.last_name.clone()),
            gender: Set(profile.gender.clone()),
            privilege: Set(PRIVILEGE_REGISTERED),
            registration_date: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        OAuthActive {
            user_id: Set(user.id),
            kind: Set(profile.kind),
            a_id: Set(profile.external_id),
            email: Set(profile.email),
            name: Set(profile.name),
            first_name: Set(profile.first_name),
            last_name: Set(profile.last_name),
            gender: Set(profile.gender),
            picture: Set(profile.picture),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(user)
    }

    /// Refreshes the provider-supplied profile fields of an existing account.
    /// `kind`, `a_id` and `user_id` are never touched.
    pub async fn update_oauth_data(&self, profile: OAuthProfile) -> Result<OAuthModel, AppError> {
        let current = self.get_oauth_data(&profile.external_id, &profile.kind).await?;

        let mut am: OAuthActive = current.into();
        am.email = Set(profile.email);
        am.name = Set(profile.name);
        am.first_name = Set(profile.first_name);
        am.last_name = Set(profile.last_name);
        am.gender = Set(profile.gender);
        am.picture = Set(profile.picture);
        am.updated_at = Set(Utc::now());

        Ok(am.update(&self.database_connection).await?)
    }
}
