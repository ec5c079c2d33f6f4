use serde::{Deserialize, Serialize};

pub const ACTIVITY_LOGGED_MESSAGE: &str = "Activity logged successfully.";

/// One row of the `activity-logs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLogRecord {
    pub pet_id: String,
    pub user_id: String,
    #[serde(rename = "activityType")]
    pub activity_type: String,
    pub comment: String,
}

impl ActivityLogRecord {
    /// Builds the record written when a pet's QR code is scanned.
    pub fn qr_code(pet_id: String, user_id: String, activity_type: String) -> Self {
        let comment = format!("Qr code log for {activity_type}");

        Self {
            pet_id,
            user_id,
            activity_type,
            comment,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogActivityResponse {
    pub message: String,
}

impl LogActivityResponse {
    pub fn logged() -> Self {
        Self {
            message: ACTIVITY_LOGGED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
