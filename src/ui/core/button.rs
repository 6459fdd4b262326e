//! Clickable regions and the registry that hit-tests them.
//!
//! Hit-testing walks buttons in registration order and stops at the first
//! one containing the point, so where buttons overlap the earliest
//! registered wins and later ones are unreachable in the overlap.

use super::error::{Result, UiError};
use super::geom::{Pos, Rect};

pub type OnClick = Box<dyn FnMut()>;

pub struct Button {
    rect: Rect,
    label: String,
    on_click: Option<OnClick>,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            on_click: None,
        }
    }

    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_callback(&self) -> bool {
        self.on_click.is_some()
    }

    pub fn hit(&self, pos: Pos) -> bool {
        self.rect.contains(pos)
    }

    fn click(&mut self) {
        if let Some(f) = self.on_click.as_mut() {
            f();
        }
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("rect", &self.rect)
            .field("label", &self.label)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct ButtonRegistry {
    buttons: Vec<Button>,
}

impl ButtonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `button`. If the backing storage cannot grow the button is
    /// dropped, the error is logged and returned, and every previously
    /// registered button stays in place.
    pub fn register(&mut self, button: Button) -> Result<()> {
        if let Err(err) = self.buttons.try_reserve(1) {
            let requested = self.buttons.len().saturating_add(1);
            tracing::error!(requested, error = %err, label = button.label(), "dropping button");
            return Err(UiError::Allocation { requested });
        }
        self.buttons.push(button);
        Ok(())
    }

    /// Invokes the callback of the first button containing `(x, y)`.
    /// Returns whether any button was hit; a hit button without a callback
    /// still counts and still shadows later buttons.
    pub fn dispatch_click(&mut self, x: u16, y: u16) -> bool {
        let pos = Pos::new(x, y);
        let Some(button) = self.buttons.iter_mut().find(|b| b.hit(pos)) else {
            return false;
        };
        tracing::debug!(x, y, label = button.label(), "button clicked");
        button.click();
        true
    }

    /// Drops every button and the backing storage. The registry is reusable
    /// afterwards.
    pub fn release_all(&mut self) {
        self.buttons = Vec::new();
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buttons.capacity()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Button> {
        self.buttons.get(index)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/button.rs"]
mod tests;
