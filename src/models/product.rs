use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Product {
    /// Unique identifier for the product
    pub id: Uuid,
    /// Display name
    pub name: String,
    pub description: Option<String>,
    /// Price in integer cents
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
