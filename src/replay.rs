//! Headless views that print a snapshot once.

use rewind_toe_core::{GameView, RenderSnapshot};
use std::io::Write;

/// Renders a snapshot as plain text: board, status, then the numbered move list.
///
/// The entry for the shown step is marked with `>`.
pub fn format_snapshot(snapshot: &RenderSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&snapshot.board.display());
    out.push_str("\n\n");
    out.push_str(&snapshot.status);
    out.push('\n');
    for entry in &snapshot.moves {
        let marker = if entry.step == snapshot.current_step {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step + 1, entry.label));
    }
    out
}

/// Writes snapshots as plain text.
#[derive(Debug)]
pub struct TextView<W> {
    out: W,
}

impl<W: Write> TextView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameView for TextView<W> {
    type Error = std::io::Error;

    fn render(&mut self, snapshot: &RenderSnapshot) -> Result<(), Self::Error> {
        self.out.write_all(format_snapshot(snapshot).as_bytes())?;
        self.out.flush()
    }
}

/// Writes snapshots as pretty-printed JSON, one document per render.
#[derive(Debug)]
pub struct JsonView<W> {
    out: W,
}

impl<W: Write> JsonView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameView for JsonView<W> {
    type Error = serde_json::Error;

    fn render(&mut self, snapshot: &RenderSnapshot) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut self.out, snapshot)?;
        writeln!(self.out).map_err(serde_json::Error::io)
    }
}
