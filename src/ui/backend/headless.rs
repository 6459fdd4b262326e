//! Headless console for tests and embedders without a terminal.
//!
//! Writes land in an in-memory cell grid (clipped at its edges) and in a log
//! of raw writes; input comes from a scripted queue.

use std::collections::VecDeque;
use std::io;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ui::core::console::ConsoleAdapter;
use crate::ui::core::error::{Result, UiError};
use crate::ui::core::event::{InputEvent, Key, KeyCode};
use crate::ui::core::geom::{Pos, Rect, Size};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    area: Rect,
    cells: Vec<String>,
}

impl CellBuffer {
    pub fn new(size: Size) -> Self {
        let area = size.area();
        let len = area.w as usize * area.h as usize;
        Self {
            area,
            cells: vec![" ".to_string(); len],
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&str> {
        let idx = self.idx(x, y)?;
        self.cells.get(idx).map(String::as_str)
    }

    fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut String> {
        let idx = self.idx(x, y)?;
        self.cells.get_mut(idx)
    }

    /// Row `y` as a string, one symbol per cell.
    pub fn row(&self, y: u16) -> String {
        (0..self.area.w)
            .filter_map(|x| self.cell(x, y))
            .collect()
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if !self.area.contains(Pos::new(x, y)) {
            return None;
        }
        Some(y as usize * self.area.w as usize + x as usize)
    }

    fn put_text(&mut self, pos: Pos, text: &str) {
        let mut x = pos.x;
        for g in text.graphemes(true) {
            let w = UnicodeWidthStr::width(g) as u16;
            if w == 0 {
                continue;
            }
            let Some(cell) = self.cell_mut(x, pos.y) else {
                break;
            };
            *cell = g.to_string();
            for dx in 1..w {
                if let Some(cell) = self.cell_mut(x.saturating_add(dx), pos.y) {
                    *cell = " ".to_string();
                }
            }
            let Some(next) = x.checked_add(w) else {
                break;
            };
            x = next;
        }
    }
}

#[derive(Debug)]
pub struct HeadlessConsole {
    buf: CellBuffer,
    writes: Vec<(Pos, String)>,
    events: VecDeque<InputEvent>,
    size: Option<Size>,
    quit_key: Key,
    raw: bool,
    mouse: bool,
    flushes: usize,
}

impl HeadlessConsole {
    pub fn new(columns: u16, rows: u16) -> Self {
        let size = Size::new(columns, rows);
        Self {
            buf: CellBuffer::new(size),
            writes: Vec::new(),
            events: VecDeque::new(),
            size: Some(size),
            quit_key: Key::simple(KeyCode::Char('q')),
            raw: false,
            mouse: false,
            flushes: 0,
        }
    }

    pub fn with_quit_key(mut self, key: Key) -> Self {
        self.quit_key = key;
        self
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Makes subsequent size queries fail, as a detached console would.
    pub fn fail_size_query(&mut self) {
        self.size = None;
    }

    pub fn buffer(&self) -> &CellBuffer {
        &self.buf
    }

    pub fn writes(&self) -> &[(Pos, String)] {
        &self.writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl ConsoleAdapter for HeadlessConsole {
    fn enable_raw_mouse_mode(&mut self) -> io::Result<()> {
        self.raw = true;
        self.mouse = true;
        Ok(())
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        self.raw = false;
        self.mouse = false;
        Ok(())
    }

    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }

    fn query_dimensions(&self) -> Result<Size> {
        self.size.ok_or_else(|| {
            UiError::PlatformQuery(io::Error::new(
                io::ErrorKind::Unsupported,
                "headless console has no size",
            ))
        })
    }

    fn write_at(&mut self, pos: Pos, text: &str) -> io::Result<()> {
        self.buf.put_text(pos, text);
        self.writes.push((pos, text.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn quit_key(&self) -> Key {
        self.quit_key
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/headless.rs"]
mod tests;
