/// Playlist domain types
use super::ids::PlaylistId;
use serde::{Deserialize, Serialize};

/// `{id, name}` pair describing a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    /// Unique playlist identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,
}

impl PlaylistSummary {
    /// Create a new summary
    pub fn new(id: PlaylistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Case-insensitive name comparison used for duplicate-name checks
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_comparison_ignores_case() {
        let summary = PlaylistSummary::new(PlaylistId::new("p1"), "Road Trip");
        assert!(summary.has_name("road trip"));
        assert!(summary.has_name("ROAD TRIP"));
        assert!(!summary.has_name("Road Trip 2"));
    }

    #[test]
    fn deserializes_id_name_pair() {
        let summary: PlaylistSummary =
            serde_json::from_str(r#"{"_id":"p9","name":"Focus"}"#).unwrap();
        assert_eq!(summary.id.as_str(), "p9");
        assert_eq!(summary.name, "Focus");
    }
}
