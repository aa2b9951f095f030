//! Dataset and distribution entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalogued dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Unique dataset identifier.
    pub id: Uuid,
    /// Dataset title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Publishing organisation.
    pub publisher: String,
    /// When the dataset was first issued.
    pub issued: DateTime<Utc>,
    /// When the dataset was last modified.
    pub modified: DateTime<Utc>,
    /// Downloadable distributions of this dataset.
    pub distributions: Vec<Distribution>,
}

impl Dataset {
    /// Looks up a distribution by ID.
    pub fn distribution(&self, id: Uuid) -> Option<&Distribution> {
        self.distributions.iter().find(|d| d.id == id)
    }
}

/// A single downloadable representation of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Unique distribution identifier.
    pub id: Uuid,
    /// Distribution title.
    pub title: String,
    /// Data format, e.g. `"CSV"` or `"GeoJSON"`.
    pub format: String,
    /// Direct download URL.
    pub download_url: String,
}
