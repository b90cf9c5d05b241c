//! Recording collaborators for note store tests.

use std::collections::HashSet;

use uuid::Uuid;

use crate::entity::{Coordinates, MarkerHandle, Note};
use crate::error::{GeonotesError, Result};
use crate::storage::{MemoryStore, PersistentStore};
use crate::view::{ListView, MapView, PanOptions};

#[derive(Default)]
pub struct RecordingMap {
    pub placed: Vec<(MarkerHandle, Coordinates, String)>,
    pub active: HashSet<MarkerHandle>,
    pub pans: Vec<(Coordinates, PanOptions)>,
    pub fail_placement: bool,
    pub fail_removal: bool,
    pub next: u64,
}

impl MapView for RecordingMap {
    fn place_marker(&mut self, coords: Coordinates, label: &str) -> Result<MarkerHandle> {
        if self.fail_placement {
            return Err(GeonotesError::View("map not ready".to_string()));
        }
        self.next += 1;
        let handle = MarkerHandle::new(self.next);
        self.placed.push((handle, coords, label.to_string()));
        self.active.insert(handle);
        Ok(handle)
    }

    fn remove_marker(&mut self, handle: MarkerHandle) -> Result<()> {
        if self.fail_removal {
            return Err(GeonotesError::View("marker layer is gone".to_string()));
        }
        self.active.remove(&handle);
        Ok(())
    }

    fn pan_to(&mut self, coords: Coordinates, options: PanOptions) -> Result<()> {
        self.pans.push((coords, options));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingList {
    pub rendered: Vec<Uuid>,
    pub removed: Vec<Uuid>,
}

impl ListView for RecordingList {
    fn render_entry(&mut self, note: &Note) -> Result<()> {
        self.rendered.push(note.id);
        Ok(())
    }

    fn remove_entry(&mut self, id: Uuid) -> Result<()> {
        self.removed.push(id);
        Ok(())
    }
}

/// A memory store that can be told to fail reads or writes.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    fail_reads: bool,
    fail_writes: bool,
}

impl FlakyStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }
}

impl PersistentStore for FlakyStore {
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(GeonotesError::Storage("quota exceeded".to_string()));
        }
        self.inner.save(key, value)
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(GeonotesError::Storage("storage unavailable".to_string()));
        }
        self.inner.load(key)
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        if self.fail_writes {
            return Err(GeonotesError::Storage("quota exceeded".to_string()));
        }
        self.inner.clear(key)
    }
}
