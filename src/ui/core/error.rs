use std::io;

pub type Result<T> = std::result::Result<T, UiError>;

#[derive(Debug)]
pub enum UiError {
    /// The border band does not fit: `width < 2 * thickness` or `height < 2 * thickness`.
    BorderTooThick {
        width: u16,
        height: u16,
        thickness: u16,
    },
    /// The button registry could not grow; the new button was dropped.
    Allocation { requested: usize },
    /// The console refused to report its size.
    PlatformQuery(io::Error),
    Io(io::Error),
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::BorderTooThick {
                width,
                height,
                thickness,
            } => write!(
                f,
                "border of {} cells is too thick for a {}x{} box",
                thickness, width, height
            ),
            UiError::Allocation { requested } => {
                write!(f, "failed to allocate room for {} buttons", requested)
            }
            UiError::PlatformQuery(err) => write!(f, "console size query failed: {}", err),
            UiError::Io(err) => write!(f, "console I/O error: {}", err),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::PlatformQuery(err) | UiError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for UiError {
    fn from(err: io::Error) -> Self {
        UiError::Io(err)
    }
}
