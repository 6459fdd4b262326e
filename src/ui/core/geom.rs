#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in terminal cells. Origin is the top-left cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Builds a box from its size and origin. No validation; consumers such as
/// border rendering check the dimensions they need.
pub const fn make_box(width: u16, height: u16, origin_x: u16, origin_y: u16) -> Rect {
    Rect::new(origin_x, origin_y, width, height)
}

/// Terminal size in cells, as reported by the console at query time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub columns: u16,
    pub rows: u16,
}

impl Size {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.columns, self.rows)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// Top-left placement for `content_len` cells of single-row content inside `rect`.
///
/// A disabled axis yields 0, not the box origin. Content wider than the box
/// saturates to the box origin instead of wrapping around.
pub fn center_position(rect: Rect, content_len: u16, horizontal: bool, vertical: bool) -> Pos {
    let x = if horizontal {
        rect.x.saturating_add(rect.w.saturating_sub(content_len) / 2)
    } else {
        0
    };
    let y = if vertical {
        rect.y.saturating_add(rect.h.saturating_sub(1) / 2)
    } else {
        0
    };
    Pos::new(x, y)
}

/// Like [`center_position`] with both axes enabled, but never places the
/// content outside `rect`.
pub fn clamped_center_position(rect: Rect, content_len: u16) -> Pos {
    let pos = center_position(rect, content_len, true, true);
    if rect.is_empty() {
        return Pos::new(rect.x, rect.y);
    }
    Pos::new(
        pos.x.min(rect.right().saturating_sub(1)),
        pos.y.min(rect.bottom().saturating_sub(1)),
    )
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
