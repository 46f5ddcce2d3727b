//! Account and session endpoints.

use async_trait::async_trait;
use serde_json::json;

use storeit_core::result::AppResult;
use storeit_entity::account::{Account, EmailToken, Session};

use super::RestClient;
use crate::traits::AccountService;

#[async_trait]
impl AccountService for RestClient {
    async fn create_email_token(&self, user_id: &str, email: &str) -> AppResult<EmailToken> {
        let url = self.url("/account/tokens/email")?;
        let body = json!({ "userId": user_id, "email": email });

        self.send_json(self.post_request(url).json(&body), "Create email token")
            .await
    }

    async fn create_session(&self, user_id: &str, secret: &str) -> AppResult<Session> {
        let url = self.url("/account/sessions/token")?;
        let body = json!({ "userId": user_id, "secret": secret });

        self.send_json(self.post_request(url).json(&body), "Create session")
            .await
    }

    async fn get(&self) -> AppResult<Account> {
        let url = self.url("/account")?;
        self.send_json(self.get_request(url), "Get account").await
    }

    async fn delete_session(&self, session_id: &str) -> AppResult<()> {
        let url = self.url(&format!("/account/sessions/{session_id}"))?;
        self.send_empty(self.delete_request(url), "Delete session").await
    }
}
