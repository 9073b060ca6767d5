use crate::db::database_service::DatabaseService;
use crate::types::{
    error::AppError,
    oauth::OAuthProfile,
    reporter_account::{DBReporterAccountCreate, SignInOutcome},
};
use crate::utils::token::{encrypt, new_activation_token, verify};
use chrono::{Duration, Utc};
use entity::user::Model as UserModel;
use tracing::{info, warn};

impl DatabaseService {
    /// Issues a fresh activation token for `email`.
    ///
    /// New emails get a user and an inactive reporter account; known emails
    /// only get the token and expiry replaced. Returns the raw token, which is
    /// never persisted.
    pub async fn issue_activation(
        &self,
        email: &str,
        ttl: Duration,
    ) -> Result<(SignInOutcome, String), AppError> {
        let token = new_activation_token();
        let token_hash = encrypt(&token).map_err(|e| AppError::Internal(e.to_string()))?;
        let expires_at = Utc::now() + ttl;

        match self.get_reporter_account_data(email).await {
            Ok(account) => {
                self.update_reporter_account_activation(account, token_hash, expires_at)
                    .await?;
                Ok((SignInOutcome::Refreshed, token))
            }
            Err(AppError::NotFound) => {
                self.insert_user_by_reporter_account(DBReporterAccountCreate {
                    account: email.to_string(),
                    password: String::new(),
                    active: false,
                    activate_token: token_hash,
                    act_exp_time: Some(expires_at),
                })
                .await?;
                Ok((SignInOutcome::Created, token))
            }
            Err(e) => Err(e),
        }
    }

    /// Checks the mailed token and marks the account active. The token is
    /// single use: a successful activation clears it.
    pub async fn activate(&self, email: &str, token: &str) -> Result<UserModel, AppError> {
        let account = self.get_reporter_account_data(email).await?;

        let expired = account.act_exp_time.map_or(true, |exp| exp <= Utc::now());
        let matches = !account.activate_token.is_empty()
            && verify(token, &account.activate_token).unwrap_or(false);
        if expired || !matches {
            warn!(email, expired, "Activation rejected");
            return Err(AppError::Unauthorized);
        }

        let account = self.mark_reporter_account_activated(account).await?;
        self.get_user_data_by_reporter_account(&account).await
    }

    /// Login through an OAuth provider: refresh a known identity, or register
    /// a new user for an unknown one.
    pub async fn sign_in_with_oauth(&self, profile: OAuthProfile) -> Result<UserModel, AppError> {
        match self.get_oauth_data(&profile.external_id, &profile.kind).await {
            Ok(_) => {
                info!(kind = %profile.kind, "Known oauth identity, refreshing profile");
                self.update_oauth_data(profile.clone()).await?;
                self.get_user_data_by_oauth(&profile).await
            }
            Err(AppError::NotFound) => self.insert_user_by_oauth(profile).await,
            Err(e) => Err(e),
        }
    }
}
