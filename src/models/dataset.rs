use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;

/// A batch of products imported together
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Dataset {
    /// Unique identifier for the dataset
    pub id: Uuid,
    /// Label given to the batch at import time
    pub label: String,
    pub imported_at: DateTime<Utc>,
}

/// The newest dataset together with the products it brought in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetSnapshot {
    pub dataset: Dataset,
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = DatasetSnapshot {
            dataset: Dataset {
                id: Uuid::nil(),
                label: "spring-refresh".to_string(),
                imported_at: Utc::now(),
            },
            products: vec![],
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["dataset"]["label"], "spring-refresh");
        assert_eq!(json["products"].as_array().unwrap().len(), 0);
    }
}
