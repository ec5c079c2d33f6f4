use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use tracing::instrument;

use crate::{
    config::SupabaseSettings,
    headers::{HEADER_APIKEY, HEADER_PREFER, PREFER_RETURN_MINIMAL},
    models::ActivityLogRecord,
};

use super::{ACTIVITY_LOGS_TABLE, ActivityLogRepository};

#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    /// Transport failure (DNS, TLS, connection reset, ...)
    #[error("Supabase request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// PostgREST answered with a non-2xx status
    #[error("Supabase API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// Writes activity logs through a Supabase project's PostgREST API.
pub struct SupabaseActivityLogRepo {
    client: reqwest::Client,
    rest_url: String,
    key: String,
}

impl SupabaseActivityLogRepo {
    pub fn new(settings: &SupabaseSettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    pub fn with_client(client: reqwest::Client, settings: &SupabaseSettings) -> Self {
        Self {
            client,
            rest_url: format!("{}/rest/v1", settings.url.trim_end_matches('/')),
            key: settings.key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }
}

#[async_trait]
impl ActivityLogRepository for SupabaseActivityLogRepo {
    #[instrument(
        name = "supabase_activity_log_repo.insert",
        skip(self, record),
        fields(pet_id = %record.pet_id, user_id = %record.user_id)
    )]
    async fn insert(&self, record: &ActivityLogRecord) -> anyhow::Result<()> {
        let response = self
            .client
            .post(self.table_url(ACTIVITY_LOGS_TABLE))
            .header(HEADER_APIKEY, &self.key)
            .header(AUTHORIZATION, format!("Bearer {}", self.key))
            .header(HEADER_PREFER, PREFER_RETURN_MINIMAL)
            .json(record)
            .send()
            .await
            .map_err(SupabaseError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        // Payload is discarded; any 2xx counts as stored.
        Ok(())
    }
}
