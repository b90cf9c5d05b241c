pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod notes;
pub mod storage;
pub mod view;

pub use config::Config;
pub use entity::{Coordinates, MarkerHandle, Note};
pub use error::{GeonotesError, Result};
pub use notes::{NoteStore, UiEvent};
pub use storage::{MemoryStore, PersistentStore, SqliteStore};
pub use view::{Geolocator, ListView, MapView, PanOptions};
