//! Immediate-mode drawing on top of a [`ConsoleAdapter`].
//!
//! Every call writes straight to the console; nothing is buffered between
//! calls beyond what the adapter itself does before `flush`.

use std::io;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::button::Button;
use super::console::ConsoleAdapter;
use super::error::{Result, UiError};
use super::geom::{clamped_center_position, center_position, Pos, Rect};

pub const BORDER_GLYPH: char = '#';

pub struct Renderer<'a, C: ConsoleAdapter + ?Sized> {
    console: &'a mut C,
}

impl<'a, C: ConsoleAdapter + ?Sized> Renderer<'a, C> {
    pub fn new(console: &'a mut C) -> Self {
        Self { console }
    }

    /// Writes `text` starting at `(x, y)`. No wrapping and no clipping.
    pub fn text(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        self.console.write_at(Pos::new(x, y), text)
    }

    /// Fills the band of `thickness` cells along every edge of `rect` with
    /// [`BORDER_GLYPH`]. Fails before drawing anything when the band does not
    /// fit inside the box.
    pub fn border(&mut self, rect: Rect, thickness: u16) -> Result<()> {
        let band = u32::from(thickness) * 2;
        if u32::from(rect.w) < band || u32::from(rect.h) < band {
            return Err(UiError::BorderTooThick {
                width: rect.w,
                height: rect.h,
                thickness,
            });
        }
        if thickness == 0 {
            return Ok(());
        }

        let full: String = std::iter::repeat(BORDER_GLYPH)
            .take(rect.w as usize)
            .collect();
        let side: String = std::iter::repeat(BORDER_GLYPH)
            .take(thickness as usize)
            .collect();
        let right_x = rect.x.checked_add(rect.w - thickness);

        for dy in 0..rect.h {
            let Some(y) = rect.y.checked_add(dy) else {
                break;
            };
            if dy < thickness || dy >= rect.h - thickness {
                self.console.write_at(Pos::new(rect.x, y), &full)?;
                continue;
            }
            self.console.write_at(Pos::new(rect.x, y), &side)?;
            if let Some(x) = right_x {
                self.console.write_at(Pos::new(x, y), &side)?;
            }
        }
        Ok(())
    }

    /// Writes `text` centred inside `rect` on the enabled axes. A disabled
    /// axis places the text at coordinate 0 of the screen.
    pub fn centered_text(
        &mut self,
        rect: Rect,
        text: &str,
        horizontal: bool,
        vertical: bool,
    ) -> io::Result<()> {
        let width = display_width(text);
        let pos = center_position(rect, width, horizontal, vertical);
        self.console.write_at(pos, text)
    }

    /// Draws a button: a one-cell border when there is room for a label row
    /// inside it, then the label centred and truncated to fit.
    pub fn button(&mut self, button: &Button) -> Result<()> {
        let rect = button.rect();
        let label_area = if rect.w >= 3 && rect.h >= 3 {
            self.border(rect, 1)?;
            Rect::new(rect.x.saturating_add(1), rect.y.saturating_add(1), rect.w - 2, rect.h - 2)
        } else {
            rect
        };
        if label_area.is_empty() {
            return Ok(());
        }

        let label = truncate_to_width(button.label(), label_area.w);
        if label.is_empty() {
            return Ok(());
        }
        let pos = clamped_center_position(label_area, display_width(label));
        self.console.write_at(pos, label)?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.console.flush()
    }
}

pub fn display_width(text: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
}

/// Longest prefix of whole graphemes whose display width fits in `max`.
pub fn truncate_to_width(text: &str, max: u16) -> &str {
    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, g) in text.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > max as usize {
            break;
        }
        used += w;
        end = idx + g.len();
    }
    &text[..end]
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
