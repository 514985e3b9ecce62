//! User intents forwarded by the shell.

use crate::buffer::PixelBuffer;
use crate::roi::Rect;
use crate::tool::{Adjustment, Tool};

/// Every operation the shell can request of an [`super::EditSession`].
///
/// Canvas variants carry pointer positions in canvas coordinates; the rest
/// are in buffer coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Load(PixelBuffer),
    Close,
    Activate(Tool),
    Adjust(Adjustment),
    Confirm(Tool),
    Cancel(Tool),
    Reset,
    SelectRoi(Rect),
    Paste { x: i32, y: i32 },
    CanvasSelect { from: (i32, i32), to: (i32, i32) },
    CanvasPaste { x: i32, y: i32 },
}

impl Event {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Load(_) => "load",
            Event::Close => "close",
            Event::Activate(_) => "activate",
            Event::Adjust(_) => "adjust",
            Event::Confirm(_) => "confirm",
            Event::Cancel(_) => "cancel",
            Event::Reset => "reset",
            Event::SelectRoi(_) => "select_roi",
            Event::Paste { .. } => "paste",
            Event::CanvasSelect { .. } => "canvas_select",
            Event::CanvasPaste { .. } => "canvas_paste",
        }
    }
}
