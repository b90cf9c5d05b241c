use uuid::Uuid;

use super::NoteStore;
use crate::entity::Coordinates;
use crate::error::{GeonotesError, Result};
use crate::storage::PersistentStore;
use crate::view::{ListView, MapView};

/// User interactions delivered by the views.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The map was clicked.
    MapClicked(Coordinates),
    /// The note text was submitted.
    NoteSubmitted(String),
    /// A list entry was clicked.
    EntrySelected(Uuid),
    /// A list entry's delete button was pressed.
    DeleteRequested(Uuid),
    /// The title was edited and confirmed.
    TitleEdited(String),
}

impl<M: MapView, L: ListView, S: PersistentStore> NoteStore<M, L, S> {
    /// Route one interaction to the matching operation.
    ///
    /// Validation failures come back for the caller to show as a notice.
    /// An unknown id can only come from a view out of step with the store,
    /// so it is logged as a defect as well as returned.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        let result = match event {
            UiEvent::MapClicked(coords) => {
                self.record_click(coords);
                Ok(())
            }
            UiEvent::NoteSubmitted(text) => self.create_note(&text).map(|_| ()),
            UiEvent::EntrySelected(id) => self.fly_to_note(id).map(|_| ()),
            UiEvent::DeleteRequested(id) => self.delete_note(id).map(|_| ()),
            UiEvent::TitleEdited(title) => self.set_title(&title),
        };

        if let Err(GeonotesError::NotFound(ref id)) = result {
            tracing::error!(id = %id, "view referenced a note the store does not have");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::super::fakes::{RecordingList, RecordingMap};
    use super::*;
    use crate::storage::MemoryStore;

    fn at(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn test_click_then_submit() {
        let mut store =
            NoteStore::new(RecordingMap::default(), RecordingList::default(), MemoryStore::new());

        store.dispatch(UiEvent::MapClicked(at(40.7, -74.0))).unwrap();
        store
            .dispatch(UiEvent::NoteSubmitted("Lunch spot".to_string()))
            .unwrap();

        assert_eq!(store.notes().len(), 1);
        let id = store.notes()[0].id;

        store.dispatch(UiEvent::EntrySelected(id)).unwrap();
        assert_eq!(store.map().pans.len(), 1);

        store.dispatch(UiEvent::DeleteRequested(id)).unwrap();
        assert!(store.notes().is_empty());
        assert_eq!(store.marker_count(), 0);
    }

    #[test]
    fn test_submit_without_click_is_a_notice() {
        let mut store =
            NoteStore::new(RecordingMap::default(), RecordingList::default(), MemoryStore::new());

        let err = store
            .dispatch(UiEvent::NoteSubmitted("orphan".to_string()))
            .unwrap_err();
        assert!(err.is_user_facing());
        assert_eq!(err.to_string(), "Choose a location!");
    }

    #[test]
    fn test_stale_delete_is_not_user_facing() {
        let mut store =
            NoteStore::new(RecordingMap::default(), RecordingList::default(), MemoryStore::new());

        let err = store
            .dispatch(UiEvent::DeleteRequested(Uuid::new_v4()))
            .unwrap_err();
        assert!(matches!(err, GeonotesError::NotFound(_)));
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_title_edit() {
        let mut store =
            NoteStore::new(RecordingMap::default(), RecordingList::default(), MemoryStore::new());

        store
            .dispatch(UiEvent::TitleEdited("My places".to_string()))
            .unwrap();
        assert_eq!(store.title(), Some("My places"));
        assert!(store.dispatch(UiEvent::TitleEdited(String::new())).is_err());
        assert_eq!(store.title(), Some("My places"));
    }
}
