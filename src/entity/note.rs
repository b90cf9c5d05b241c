// src/entity/note.rs
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Coordinates, MarkerHandle};
use crate::error::{GeonotesError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub coordinates: Coordinates,
    pub text: String,
    /// Assigned by the map after placement.
    #[serde(skip)]
    pub marker: Option<MarkerHandle>,
}

impl Note {
    /// Build a note from a location and user text. The text is stored trimmed.
    pub fn new(coordinates: Coordinates, text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GeonotesError::validation("Note text cannot be empty"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            coordinates,
            text: text.to_string(),
            marker: None,
        })
    }

    /// Creation time in the local timezone, e.g. `October 19, 2026 14:05`.
    pub fn display_date(&self) -> String {
        format_date(&self.timestamp.with_timezone(&Local))
    }

    pub fn marker_label(&self) -> String {
        format!("Note on {}", self.display_date())
    }

    pub fn short_id(&self) -> String {
        short_id(&self.id)
    }
}

/// First seven characters of an id, as shown to users.
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..7].to_string()
}

pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%B %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> Coordinates {
        Coordinates::new(40.7, -74.0).unwrap()
    }

    #[test]
    fn test_new_trims_text() {
        let note = Note::new(coords(), "  Lunch spot \n").unwrap();
        assert_eq!(note.text, "Lunch spot");
        assert!(note.marker.is_none());
    }

    #[test]
    fn test_new_rejects_blank_text() {
        assert!(matches!(
            Note::new(coords(), ""),
            Err(GeonotesError::Validation(_))
        ));
        assert!(matches!(
            Note::new(coords(), " \t\n"),
            Err(GeonotesError::Validation(_))
        ));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Note::new(coords(), "a").unwrap();
        let b = Note::new(coords(), "b").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_short_id() {
        let note = Note::new(coords(), "a").unwrap();
        assert_eq!(note.short_id().len(), 7);
        assert!(note.id.to_string().starts_with(&note.short_id()));
        assert_eq!(note.short_id(), short_id(&note.id));
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 9, 7, 5, 0).unwrap();
        assert_eq!(format_date(&dt), "October 9, 2026 07:05");
    }

    #[test]
    fn test_serialized_shape_omits_marker() {
        let mut note = Note::new(coords(), "Lunch spot").unwrap();
        note.marker = Some(MarkerHandle::new(3));

        let value = serde_json::to_value(&note).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("timestamp"));
        assert_eq!(obj["coordinates"], serde_json::json!([40.7, -74.0]));
        assert_eq!(obj["text"], "Lunch spot");
    }

    #[test]
    fn test_deserialize_leaves_marker_empty() {
        let json = r#"{
            "id": "0b5c4a2e-8a55-4d1e-9a63-2f9a4c1b7e10",
            "timestamp": "2026-10-19T12:00:00Z",
            "coordinates": [40.7, -74.0],
            "text": "Lunch spot"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id.to_string(), "0b5c4a2e-8a55-4d1e-9a63-2f9a4c1b7e10");
        assert!(note.marker.is_none());
    }
}
