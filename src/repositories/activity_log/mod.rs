use async_trait::async_trait;
use mockall::automock;

use crate::models::ActivityLogRecord;

pub mod supabase;
pub use supabase::{SupabaseActivityLogRepo, SupabaseError};

pub const ACTIVITY_LOGS_TABLE: &str = "activity-logs";

#[automock]
#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Insert a single activity log row
    async fn insert(&self, record: &ActivityLogRecord) -> anyhow::Result<()>;
}

pub type ActivityLogRepo = std::sync::Arc<dyn ActivityLogRepository + Send + Sync>;
