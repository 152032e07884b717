use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    /// 1 to 5
    pub rating: u8,
    pub comment: String,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
}
