//! The note store: authoritative note collection, marker table and the
//! pending map click, kept in step with the views and persistent storage.

mod events;
#[cfg(test)]
mod fakes;

pub use events::UiEvent;

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::entity::{Coordinates, MarkerHandle, Note};
use crate::error::{GeonotesError, Result};
use crate::storage::{PersistentStore, NOTES_KEY, TITLE_KEY};
use crate::view::{Geolocator, ListView, MapView, PanOptions};

/// Owns the notes and their markers and mediates every mutation.
///
/// All operations take `&mut self` and run to completion, so the
/// collection and the marker table always have a single writer. Sharing a
/// store across threads means wrapping the whole store in one lock, since
/// create, delete and load are read-modify-write sequences over both.
///
/// Persistence is best effort: a failed write is logged and the in-memory
/// state stays authoritative for the session.
pub struct NoteStore<M, L, S> {
    map: M,
    list: L,
    storage: S,
    notes: Vec<Note>,
    markers: HashMap<MarkerHandle, Uuid>,
    pending: Option<Coordinates>,
    title: Option<String>,
    pan: PanOptions,
    home: Coordinates,
}

impl<M: MapView, L: ListView, S: PersistentStore> NoteStore<M, L, S> {
    pub fn new(map: M, list: L, storage: S) -> Self {
        Self {
            map,
            list,
            storage,
            notes: Vec::new(),
            markers: HashMap::new(),
            pending: None,
            title: None,
            pan: PanOptions::default(),
            home: Coordinates::NEW_YORK,
        }
    }

    pub fn with_pan_options(mut self, pan: PanOptions) -> Self {
        self.pan = pan;
        self
    }

    /// Where the map starts when the current position is unknown.
    pub fn with_home(mut self, home: Coordinates) -> Self {
        self.home = home;
        self
    }

    /// Remember where the map was clicked, replacing any earlier click.
    pub fn record_click(&mut self, coords: Coordinates) {
        tracing::debug!(lat = coords.lat(), lng = coords.lng(), "map click recorded");
        self.pending = Some(coords);
    }

    /// Create a note at the pending location.
    ///
    /// Fails without touching any state when the text is blank or no
    /// location has been chosen.
    pub fn create_note(&mut self, text: &str) -> Result<&Note> {
        if text.trim().is_empty() {
            return Err(GeonotesError::validation("Note text cannot be empty"));
        }
        let coords = self
            .pending
            .ok_or_else(|| GeonotesError::validation("Choose a location!"))?;

        let mut note = Note::new(coords, text)?;
        self.pending = None;

        self.show(&mut note);
        tracing::info!(id = %note.id, lat = coords.lat(), lng = coords.lng(), "note created");
        self.notes.push(note);
        self.persist_notes();

        let idx = self.notes.len() - 1;
        Ok(&self.notes[idx])
    }

    /// Delete a note and its marker.
    ///
    /// The note leaves the collection and storage first. Failing to remove
    /// the list entry or the marker afterwards is logged and does not bring
    /// the note back.
    pub fn delete_note(&mut self, id: Uuid) -> Result<Note> {
        let idx = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GeonotesError::NotFound(id.to_string()))?;

        let note = self.notes.remove(idx);
        if let Some(handle) = note.marker {
            self.markers.remove(&handle);
        }
        self.persist_notes();

        self.hide(&note);
        tracing::info!(id = %id, "note deleted");
        Ok(note)
    }

    /// Replace the in-memory state with what storage holds.
    ///
    /// Never fails: missing or malformed data loads as an empty collection.
    /// Markers are placed afresh for every note since handles are not
    /// persisted. Returns the number of notes loaded.
    pub fn load(&mut self) -> usize {
        self.clear_session();

        for mut note in self.read_notes() {
            self.show(&mut note);
            self.notes.push(note);
        }

        if let Some(title) = self.read_title() {
            self.title = Some(title);
        }

        tracing::debug!(count = self.notes.len(), "notes loaded");
        self.notes.len()
    }

    /// Coordinates of a note, for the caller to move the map to.
    pub fn focus_note(&self, id: Uuid) -> Result<Coordinates> {
        self.note(id)
            .map(|n| n.coordinates)
            .ok_or_else(|| GeonotesError::NotFound(id.to_string()))
    }

    /// Fly the map to a note.
    pub fn fly_to_note(&mut self, id: Uuid) -> Result<Coordinates> {
        let coords = self.focus_note(id)?;
        self.map.pan_to(coords, self.pan)?;
        Ok(coords)
    }

    /// Fly the map to wherever the geolocator says we are.
    pub fn locate<G: Geolocator + ?Sized>(&mut self, geo: &G) -> Result<Coordinates> {
        let coords = geo.current_position()?;
        self.map.pan_to(coords, self.pan)?;
        Ok(coords)
    }

    /// Seed the map view: the current position if the geolocator has one,
    /// otherwise the home position.
    pub fn initial_view<G: Geolocator + ?Sized>(&mut self, geo: &G) -> Result<Coordinates> {
        let coords = match geo.current_position() {
            Ok(coords) => coords,
            Err(e) => {
                tracing::warn!(error = %e, "position unavailable, using home");
                self.home
            }
        };
        self.map.pan_to(coords, self.pan)?;
        Ok(coords)
    }

    pub fn set_title(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(GeonotesError::validation("Title cannot be empty"));
        }

        self.title = Some(value.to_string());
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(e) = self.storage.save(TITLE_KEY, &raw) {
                    tracing::warn!(error = %e, "failed to persist title");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize title"),
        }
        Ok(())
    }

    /// Drop every note, including the stored collection. The title is kept.
    pub fn reset(&mut self) {
        self.clear_session();
        if let Err(e) = self.storage.clear(NOTES_KEY) {
            tracing::warn!(error = %e, "failed to clear stored notes");
        }
        tracing::info!("notes reset");
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Find the single note whose id starts with `prefix`.
    pub fn resolve_id(&self, prefix: &str) -> Result<Uuid> {
        let prefix = prefix.trim().to_lowercase();
        let mut matches = self
            .notes
            .iter()
            .filter(|n| !prefix.is_empty() && n.id.to_string().starts_with(&prefix));

        match (matches.next(), matches.next()) {
            (Some(note), None) => Ok(note.id),
            (Some(_), Some(_)) => Err(GeonotesError::NotFound(format!(
                "{} (ambiguous prefix)",
                prefix
            ))),
            _ => Err(GeonotesError::NotFound(prefix)),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn pending_location(&self) -> Option<Coordinates> {
        self.pending
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_parts(self) -> (M, L, S) {
        (self.map, self.list, self.storage)
    }

    /// Place a marker for `note` and render its list entry.
    fn show(&mut self, note: &mut Note) {
        match self.map.place_marker(note.coordinates, &note.marker_label()) {
            Ok(handle) => {
                if let Some(old) = note.marker.replace(handle) {
                    self.markers.remove(&old);
                }
                self.markers.insert(handle, note.id);
            }
            Err(e) => tracing::warn!(id = %note.id, error = %e, "failed to place marker"),
        }

        if let Err(e) = self.list.render_entry(note) {
            tracing::warn!(id = %note.id, error = %e, "failed to render list entry");
        }
    }

    fn hide(&mut self, note: &Note) {
        if let Err(e) = self.list.remove_entry(note.id) {
            tracing::warn!(id = %note.id, error = %e, "failed to remove list entry");
        }
        if let Some(handle) = note.marker {
            if let Err(e) = self.map.remove_marker(handle) {
                tracing::warn!(id = %note.id, error = %e, "failed to remove marker");
            }
        }
    }

    /// Forget all notes of this session, removing their visuals.
    fn clear_session(&mut self) {
        let notes = std::mem::take(&mut self.notes);
        for note in &notes {
            self.hide(note);
        }
        self.markers.clear();
        self.pending = None;
    }

    fn persist_notes(&mut self) {
        let raw = match serde_json::to_string(&self.notes) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize notes");
                return;
            }
        };
        if let Err(e) = self.storage.save(NOTES_KEY, &raw) {
            tracing::warn!(error = %e, "failed to persist notes");
        }
    }

    fn read_notes(&self) -> Vec<Note> {
        let raw = match self.storage.load(NOTES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored notes");
                return Vec::new();
            }
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "stored notes are malformed, starting empty");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut notes = Vec::with_capacity(records.len());
        for record in records {
            match serde_json::from_value::<Note>(record) {
                Ok(note) if note.text.trim().is_empty() => {
                    tracing::warn!(id = %note.id, "skipping stored note with empty text");
                }
                Ok(note) if !seen.insert(note.id) => {
                    tracing::warn!(id = %note.id, "skipping duplicate stored note");
                }
                Ok(note) => notes.push(note),
                Err(e) => tracing::warn!(error = %e, "skipping malformed stored note"),
            }
        }
        notes
    }

    fn read_title(&self) -> Option<String> {
        let raw = match self.storage.load(TITLE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored title");
                return None;
            }
        };
        match serde_json::from_str::<String>(&raw) {
            Ok(title) if !title.trim().is_empty() => Some(title),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "stored title is malformed");
                None
            }
        }
    }
}
