//! Edit session state machine.
//!
//! An [`EditSession`] owns the image being edited and walks each tool
//! through `Idle -> Previewing -> Confirmed | Cancelled -> Idle`:
//!
//! - `activate` snapshots the displayed image into a working copy and
//!   renders a first preview with the tool's last-used parameter.
//! - `adjust_preview` re-renders from the working copy. The displayed
//!   image is never touched while previewing.
//! - `confirm` commits one last render to the displayed image; `cancel`
//!   throws the working copy away.
//!
//! A selected region scopes every preview and commit. Selecting also copies
//! the region into the clipboard, which `paste_fragment` writes back into
//! the displayed image at another origin.
//!
//! The shell talks to the session either through the individual methods or
//! by sending [`Event`]s to [`EditSession::handle`], which forwards the
//! resulting frame to a [`Presenter`].

mod error;
mod event;
mod presenter;
mod viewport;

pub use error::SessionError;
pub use event::Event;
pub use presenter::Presenter;
pub use viewport::{Placement, Viewport};

use std::path::Path;

use log::{debug, warn};

use crate::buffer::PixelBuffer;
use crate::config::EditorConfig;
use crate::encode::{encode_image, save_image, ExportFormat};
use crate::roi::{Rect, Region};
use crate::tool::{Adjustment, Tool, ToolSettings};

/// State of one editing session.
#[derive(Debug, Clone)]
pub struct EditSession {
    config: EditorConfig,
    viewport: Viewport,
    original: Option<PixelBuffer>,
    displayed: Option<PixelBuffer>,
    working: Option<PixelBuffer>,
    preview: Option<PixelBuffer>,
    active: Option<Tool>,
    settings: ToolSettings,
    selected_roi: Option<Region>,
    clipboard: Option<PixelBuffer>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditSession {
    pub fn new(config: EditorConfig) -> Self {
        let config = config.sanitized();
        Self {
            viewport: Viewport::new(config.canvas_width, config.canvas_height),
            settings: config.tool_defaults,
            config,
            original: None,
            displayed: None,
            working: None,
            preview: None,
            active: None,
            selected_roi: None,
            clipboard: None,
        }
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Start editing `image`, dropping any previous image and edit state.
    ///
    /// Tool settings carry over from the previous image.
    pub fn load(&mut self, image: PixelBuffer) -> &PixelBuffer {
        debug!("Loaded {}x{} image", image.width(), image.height());
        self.discard_edit();
        self.selected_roi = None;
        self.clipboard = None;
        self.original = Some(image.clone());
        self.displayed.insert(image)
    }

    /// Drop the image and all edit state.
    pub fn close(&mut self) {
        debug!("Closed session");
        self.discard_edit();
        self.selected_roi = None;
        self.clipboard = None;
        self.original = None;
        self.displayed = None;
    }

    // ------------------------------------------------------------------------
    // Tool lifecycle
    // ------------------------------------------------------------------------

    /// Enter preview mode for `tool` and return the first preview.
    ///
    /// A tool that was already previewing is abandoned: its working copy
    /// and preview are discarded, the displayed image is left alone.
    pub fn activate(&mut self, tool: Tool) -> Result<&PixelBuffer, SessionError> {
        let Some(displayed) = self.displayed.as_ref() else {
            warn!("Cannot activate {tool}: no image loaded");
            return Err(SessionError::NoImage);
        };

        if let Some(previous) = self.active.filter(|&active| active != tool) {
            debug!("Abandoning {previous} preview");
        }

        let working = displayed.clone();
        let adjustment = self.settings.adjustment(tool);
        let preview = adjustment.apply_scoped(&working, self.roi_rect());

        debug!("Activated {tool} with {adjustment:?}");
        self.working = Some(working);
        self.active = Some(tool);
        Ok(self.preview.insert(preview))
    }

    /// Re-render the preview of the active tool with a new parameter.
    pub fn adjust_preview(&mut self, adjustment: Adjustment) -> Result<&PixelBuffer, SessionError> {
        let tool = adjustment.tool();
        let working = match (self.active, self.working.as_ref()) {
            (Some(active), Some(working)) if active == tool => working,
            _ => {
                warn!("Cannot adjust {tool}: not previewing");
                return Err(SessionError::ToolNotActive(tool));
            }
        };

        let adjustment = adjustment.clamped();
        self.settings.record(adjustment);
        let preview = adjustment.apply_scoped(working, self.roi_rect());
        Ok(self.preview.insert(preview))
    }

    /// Commit the active tool's last parameter to the displayed image.
    ///
    /// Clears the selection and the clipboard.
    pub fn confirm(&mut self, tool: Tool) -> Result<&PixelBuffer, SessionError> {
        self.ensure_active(tool)?;
        let working = self
            .working
            .take()
            .ok_or(SessionError::ToolNotActive(tool))?;

        let adjustment = self.settings.adjustment(tool);
        let result = adjustment.apply_scoped(&working, self.roi_rect());

        debug!("Confirmed {adjustment:?}");
        self.discard_edit();
        self.selected_roi = None;
        self.clipboard = None;
        Ok(self.displayed.insert(result))
    }

    /// Leave preview mode without changing the displayed image.
    ///
    /// Clears the selection; the clipboard is kept.
    pub fn cancel(&mut self, tool: Tool) -> Result<&PixelBuffer, SessionError> {
        self.ensure_active(tool)?;
        debug!("Cancelled {tool}");
        self.discard_edit();
        self.selected_roi = None;
        self.displayed.as_ref().ok_or(SessionError::NoImage)
    }

    /// Go back to the image as loaded and the configured tool defaults.
    pub fn reset(&mut self) -> Result<&PixelBuffer, SessionError> {
        let Some(original) = self.original.as_ref() else {
            warn!("Cannot reset: no image loaded");
            return Err(SessionError::NoImage);
        };

        let restored = original.clone();
        debug!("Reset to original image");
        self.discard_edit();
        self.selected_roi = None;
        self.clipboard = None;
        self.settings = self.config.tool_defaults;
        Ok(self.displayed.insert(restored))
    }

    // ------------------------------------------------------------------------
    // Selection and clipboard
    // ------------------------------------------------------------------------

    /// Select a region in buffer coordinates and copy it to the clipboard.
    ///
    /// A rectangle that clamps to nothing clears the selection and leaves
    /// the clipboard as it was. A previewing tool is re-rendered against the
    /// new selection.
    pub fn select_roi(&mut self, rect: Rect) -> Result<Option<Region>, SessionError> {
        let Some(displayed) = self.displayed.as_ref() else {
            warn!("Cannot select: no image loaded");
            return Err(SessionError::NoImage);
        };

        match rect.clamp_to(displayed.width(), displayed.height()) {
            Some(region) => {
                debug!("Selected {region:?}");
                self.clipboard = Some(displayed.region(region));
                self.selected_roi = Some(region);
            }
            None => {
                debug!("Empty selection {rect:?}, ROI cleared");
                self.selected_roi = None;
            }
        }

        self.refresh_preview();
        Ok(self.selected_roi)
    }

    /// Select a region from a canvas drag.
    pub fn select_roi_on_canvas(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<Option<Region>, SessionError> {
        let placement = self.placement().ok_or_else(|| {
            warn!("Cannot select: no image loaded");
            SessionError::NoImage
        })?;
        self.select_roi(placement.to_image_rect(from, to))
    }

    /// Write the clipboard into the displayed image at `(x, y)`.
    ///
    /// Only the part that fits is written. Returns the overwritten region,
    /// or `None` when the fragment lands entirely outside the image.
    pub fn paste_fragment(&mut self, x: i32, y: i32) -> Result<Option<Region>, SessionError> {
        let Some(displayed) = self.displayed.as_mut() else {
            warn!("Cannot paste: no image loaded");
            return Err(SessionError::NoImage);
        };
        let Some(fragment) = self.clipboard.as_ref() else {
            warn!("Cannot paste: nothing copied");
            return Err(SessionError::NothingCopied);
        };

        let written = displayed.blit(fragment, i64::from(x), i64::from(y));
        debug!("Pasted at ({x}, {y}): {written:?}");
        Ok(written)
    }

    /// Paste at a canvas position.
    pub fn paste_on_canvas(&mut self, x: i32, y: i32) -> Result<Option<Region>, SessionError> {
        let placement = self.placement().ok_or_else(|| {
            warn!("Cannot paste: no image loaded");
            SessionError::NoImage
        })?;
        let (x, y) = placement.to_image(x, y);
        self.paste_fragment(x, y)
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    /// Encode the displayed image for `file_name`, choosing the format by
    /// extension. JPEG uses the configured quality.
    ///
    /// A pending preview is not part of the export.
    pub fn export(&self, file_name: impl AsRef<Path>) -> Result<Vec<u8>, SessionError> {
        let displayed = self.committed()?;
        let format = ExportFormat::from_path(file_name, self.config.jpeg_quality)?;
        Ok(encode_image(displayed, format)?)
    }

    /// Write the displayed image to `path`. On failure nothing changes in
    /// the session.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let displayed = self.committed()?;
        save_image(displayed, path, self.config.jpeg_quality).map_err(|e| {
            warn!("Save failed: {e}");
            SessionError::from(e)
        })
    }

    // ------------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------------

    /// Apply `event` and return the frame the shell should render, if any.
    pub fn dispatch(&mut self, event: Event) -> Result<Option<&PixelBuffer>, SessionError> {
        debug!("Dispatching {}", event.name());
        match event {
            Event::Load(image) => Ok(Some(self.load(image))),
            Event::Close => {
                self.close();
                Ok(None)
            }
            Event::Activate(tool) => self.activate(tool).map(Some),
            Event::Adjust(adjustment) => self.adjust_preview(adjustment).map(Some),
            Event::Confirm(tool) => self.confirm(tool).map(Some),
            Event::Cancel(tool) => self.cancel(tool).map(Some),
            Event::Reset => self.reset().map(Some),
            Event::SelectRoi(rect) => {
                self.select_roi(rect)?;
                Ok(self.presented())
            }
            Event::Paste { x, y } => {
                self.paste_fragment(x, y)?;
                Ok(self.presented())
            }
            Event::CanvasSelect { from, to } => {
                self.select_roi_on_canvas(from, to)?;
                Ok(self.presented())
            }
            Event::CanvasPaste { x, y } => {
                self.paste_on_canvas(x, y)?;
                Ok(self.presented())
            }
        }
    }

    /// Dispatch `event` and hand the resulting frame to `presenter`.
    pub fn handle<P>(&mut self, event: Event, presenter: &mut P) -> Result<(), SessionError>
    where
        P: Presenter + ?Sized,
    {
        if let Some(frame) = self.dispatch(event)? {
            presenter.present(frame);
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the canvas used for pointer mapping.
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }

    /// How the displayed image sits on the canvas.
    pub fn placement(&self) -> Option<Placement> {
        self.displayed
            .as_ref()
            .map(|image| self.viewport.placement(image.width(), image.height()))
    }

    pub fn original(&self) -> Option<&PixelBuffer> {
        self.original.as_ref()
    }

    /// The committed image.
    pub fn displayed(&self) -> Option<&PixelBuffer> {
        self.displayed.as_ref()
    }

    pub fn working_copy(&self) -> Option<&PixelBuffer> {
        self.working.as_ref()
    }

    pub fn preview(&self) -> Option<&PixelBuffer> {
        self.preview.as_ref()
    }

    /// What the shell should currently show: the preview while a tool is
    /// previewing, the displayed image otherwise.
    pub fn presented(&self) -> Option<&PixelBuffer> {
        self.preview.as_ref().or(self.displayed.as_ref())
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.active
    }

    pub fn is_previewing(&self) -> bool {
        self.active.is_some()
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn selected_roi(&self) -> Option<Region> {
        self.selected_roi
    }

    /// The selection in canvas coordinates, for drawing its outline.
    pub fn selection_on_canvas(&self) -> Option<Rect> {
        let region = self.selected_roi?;
        Some(self.placement()?.region_to_canvas(region))
    }

    pub fn clipboard(&self) -> Option<&PixelBuffer> {
        self.clipboard.as_ref()
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn committed(&self) -> Result<&PixelBuffer, SessionError> {
        self.displayed.as_ref().ok_or_else(|| {
            warn!("Cannot export: no image loaded");
            SessionError::NoImage
        })
    }

    fn roi_rect(&self) -> Option<Rect> {
        self.selected_roi.map(Rect::from)
    }

    fn ensure_active(&self, tool: Tool) -> Result<(), SessionError> {
        if self.active == Some(tool) {
            Ok(())
        } else {
            warn!("{tool} is not previewing");
            Err(SessionError::ToolNotActive(tool))
        }
    }

    fn discard_edit(&mut self) {
        self.working = None;
        self.preview = None;
        self.active = None;
    }

    fn refresh_preview(&mut self) {
        if let (Some(tool), Some(working)) = (self.active, self.working.as_ref()) {
            let preview = self
                .settings
                .adjustment(tool)
                .apply_scoped(working, self.roi_rect());
            self.preview = Some(preview);
        }
    }
}
