use std::io::Write;

use uuid::Uuid;

use super::{ListView, MapView, PanOptions};
use crate::entity::{short_id, Coordinates, MarkerHandle, Note};
use crate::error::{GeonotesError, Result};

/// A console that cannot be written to is a broken view.
fn view_error(e: std::io::Error) -> GeonotesError {
    GeonotesError::View(e.to_string())
}

/// A map that reports its drawing commands as text.
///
/// Marker placement is silent unless `verbose` is set, so listing notes
/// does not print a line per marker. A `quiet` map prints nothing at all,
/// which keeps machine-readable output clean.
pub struct ConsoleMap<W: Write> {
    out: W,
    next_handle: u64,
    verbose: bool,
    quiet: bool,
}

impl ConsoleMap<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleMap<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_handle: 1,
            verbose: false,
            quiet: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn report(&mut self, line: std::fmt::Arguments<'_>) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{}", line).map_err(view_error)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MapView for ConsoleMap<W> {
    fn place_marker(&mut self, coords: Coordinates, label: &str) -> Result<MarkerHandle> {
        let handle = MarkerHandle::new(self.next_handle);
        self.next_handle += 1;
        if self.verbose {
            self.report(format_args!("Pinned {} at ({}) - {}", handle, coords, label))?;
        }
        Ok(handle)
    }

    fn remove_marker(&mut self, handle: MarkerHandle) -> Result<()> {
        if self.verbose {
            self.report(format_args!("Removed {}", handle))?;
        }
        Ok(())
    }

    fn pan_to(&mut self, coords: Coordinates, options: PanOptions) -> Result<()> {
        let verb = if options.animated { "Flying" } else { "Jumping" };
        self.report(format_args!("{} to ({}) at zoom {}", verb, coords, options.zoom))
    }
}

/// One list entry: id, date and position, then the text on its own line.
pub fn format_entry(note: &Note) -> String {
    format!(
        "  ({}) {}  [{}]\n      {}",
        note.short_id(),
        note.display_date(),
        note.coordinates,
        note.text
    )
}

/// A list that prints each entry as it is rendered.
pub struct ConsoleList<W: Write> {
    out: W,
    quiet: bool,
}

impl ConsoleList<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleList<W> {
    pub fn new(out: W) -> Self {
        Self { out, quiet: false }
    }

    /// Suppress output, for commands that only need the loaded state.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ListView for ConsoleList<W> {
    fn render_entry(&mut self, note: &Note) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{}", format_entry(note)).map_err(view_error)
    }

    fn remove_entry(&mut self, id: Uuid) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "Removed note ({})", short_id(&id)).map_err(view_error)
    }
}
