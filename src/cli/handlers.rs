use std::env;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::entity::Coordinates;
use crate::error::{GeonotesError, Result};
use crate::notes::NoteStore;
use crate::storage::{SqliteStore, GEONOTES_DIR};
use crate::view::{format_entry, ConsoleList, ConsoleMap, EnvGeolocator, PanOptions};

type CliStore = NoteStore<ConsoleMap<Stdout>, ConsoleList<Stdout>, SqliteStore>;

/// Find the project root by looking for .geonotes/
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(GEONOTES_DIR).exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

/// Open the project and load its notes without echoing list entries.
///
/// `json` silences the map so stdout carries only the JSON document.
fn open_store(verbose: bool, json: bool) -> Result<CliStore> {
    let root = find_project_root();
    let storage = SqliteStore::open(&root)?;
    let config = Config::load(&root.join(GEONOTES_DIR))?;

    let mut store = NoteStore::new(
        ConsoleMap::stdout().verbose(verbose).quiet(json),
        ConsoleList::stdout().quiet(true),
        storage,
    )
    .with_pan_options(PanOptions::from(&config))
    .with_home(config.default_center);
    store.load();
    Ok(store)
}

/// Ask for confirmation on a terminal; refuse in non-interactive mode.
fn confirm(prompt: &str) -> Result<bool> {
    eprintln!("{} [y/N] ", prompt);

    if atty::is(atty::Stream::Stdin) {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().eq_ignore_ascii_case("y"))
    } else {
        Err(GeonotesError::Storage(
            "Use --force in non-interactive mode".to_string(),
        ))
    }
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;
    init_at(&root)?;
    println!("Initialized geonotes project in {}", root.display());
    Ok(())
}

fn init_at(root: &Path) -> Result<()> {
    let store = SqliteStore::init(root)?;
    if let Some(dir) = store.project_dir() {
        Config::default().save(dir)?;
    }
    Ok(())
}

pub fn handle_add(lat: f64, lng: f64, text: Vec<String>, json: bool, verbose: bool) -> Result<()> {
    let coords = Coordinates::new(lat, lng)?;
    let mut store = open_store(verbose, json)?;

    store.record_click(coords);
    let note = store.create_note(&text.join(" "))?;

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!(
            "Created note ({}) at ({}) - {}",
            note.short_id(),
            note.coordinates,
            note.text
        );
    }

    Ok(())
}

pub fn handle_list(json: bool, verbose: bool) -> Result<()> {
    let store = open_store(verbose, json)?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.notes())?);
        return Ok(());
    }

    if let Some(title) = store.title() {
        println!("{}\n", title);
    }

    if store.notes().is_empty() {
        println!("No notes found.");
    } else {
        println!("Notes:\n");
        for note in store.notes() {
            println!("{}", format_entry(note));
        }
    }

    Ok(())
}

pub fn handle_show(id: String, json: bool, verbose: bool) -> Result<()> {
    let mut store = open_store(verbose, json)?;
    let id = store.resolve_id(&id)?;

    if let Some(note) = store.note(id) {
        if json {
            println!("{}", serde_json::to_string_pretty(note)?);
        } else {
            println!("Note ({})", note.id);
            println!("Created: {}", note.display_date());
            println!("Location: {}", note.coordinates);
            println!("\n{}\n", note.text);
        }
    }

    store.fly_to_note(id)?;
    Ok(())
}

pub fn handle_delete(id: String, force: bool, verbose: bool) -> Result<()> {
    let mut store = open_store(verbose, false)?;
    let id = store.resolve_id(&id)?;

    if !force {
        let Some(note) = store.note(id) else {
            return Err(GeonotesError::NotFound(id.to_string()));
        };
        let prompt = format!("Delete note ({}) - {}?", note.short_id(), note.text);
        if !confirm(&prompt)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let note = store.delete_note(id)?;
    println!("Deleted note ({}) - {}", note.short_id(), note.text);
    Ok(())
}

pub fn handle_title(value: Option<String>, verbose: bool) -> Result<()> {
    let mut store = open_store(verbose, false)?;

    match value {
        Some(value) => {
            store.set_title(&value)?;
            println!("Title set to '{}'", store.title().unwrap_or_default());
        }
        None => match store.title() {
            Some(title) => println!("{}", title),
            None => println!("No title set."),
        },
    }

    Ok(())
}

pub fn handle_locate(fallback: bool, verbose: bool) -> Result<()> {
    let mut store = open_store(verbose, false)?;
    if fallback {
        store.initial_view(&EnvGeolocator)?;
    } else {
        store.locate(&EnvGeolocator)?;
    }
    Ok(())
}

pub fn handle_reset(force: bool, verbose: bool) -> Result<()> {
    let mut store = open_store(verbose, false)?;
    let count = store.notes().len();

    if !force && !confirm(&format!("Delete all {} notes?", count))? {
        println!("Cancelled.");
        return Ok(());
    }

    store.reset();
    println!("Cleared {} notes.", count);
    Ok(())
}
