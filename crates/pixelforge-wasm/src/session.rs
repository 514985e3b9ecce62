//! Edit session WASM bindings.
//!
//! Wraps the core edit session for a browser shell. Each UI action maps to
//! one method; whenever the session produces a frame it is handed to the
//! callback registered with `set_render_callback`.
//!
//! # Example
//!
//! ```typescript
//! const session = JsEditSession.with_config({ canvas_width: 800, canvas_height: 600 });
//! session.set_render_callback((frame: JsPixelBuffer) => draw(frame));
//!
//! session.load(decode_image(bytes));
//! session.activate(ToolKind.Blur);
//! slider.oninput = () => session.adjust_preview(ToolKind.Blur, slider.valueAsNumber);
//! okButton.onclick = () => session.confirm(ToolKind.Blur);
//! ```

use crate::js_error;
use crate::types::JsPixelBuffer;
use pixelforge_core::{
    Adjustment, EditSession, EditorConfig, Event, PixelBuffer, Presenter, Rect, Region, Tool,
};
use wasm_bindgen::prelude::*;

/// Editing tools, as exposed to JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Blur = 0,
    Brightness = 1,
    Contrast = 2,
    Sharpen = 3,
    Denoise = 4,
    Grayscale = 5,
}

impl From<ToolKind> for Tool {
    fn from(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Blur => Tool::Blur,
            ToolKind::Brightness => Tool::Brightness,
            ToolKind::Contrast => Tool::Contrast,
            ToolKind::Sharpen => Tool::Sharpen,
            ToolKind::Denoise => Tool::Denoise,
            ToolKind::Grayscale => Tool::Grayscale,
        }
    }
}

/// Forwards frames to a JS function, keeping the first error it throws.
struct CallbackPresenter<'a> {
    callback: &'a js_sys::Function,
    error: Option<JsValue>,
}

impl Presenter for CallbackPresenter<'_> {
    fn present(&mut self, frame: &PixelBuffer) {
        let value = JsValue::from(JsPixelBuffer::from_buffer(frame.clone()));
        if let Err(err) = self.callback.call1(&JsValue::NULL, &value) {
            self.error.get_or_insert(err);
        }
    }
}

/// An editing session for JavaScript.
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
    on_render: Option<js_sys::Function>,
}

impl Default for JsEditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create a session with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsEditSession {
        Self::from_config(EditorConfig::default())
    }

    /// Create a session from a configuration object.
    ///
    /// Missing fields take their defaults, e.g.
    /// `{ canvas_width: 800, tool_defaults: { denoise_strength: 40 } }`.
    pub fn with_config(config: JsValue) -> Result<JsEditSession, JsValue> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Ok(Self::from_config(config))
    }

    /// Register the function called with every frame to draw.
    pub fn set_render_callback(&mut self, callback: js_sys::Function) {
        self.on_render = Some(callback);
    }

    pub fn clear_render_callback(&mut self) {
        self.on_render = None;
    }

    /// Resize the canvas used to map pointer positions.
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.inner.set_canvas_size(width, height);
    }

    pub fn load(&mut self, image: &JsPixelBuffer) -> Result<(), JsValue> {
        self.send(Event::Load(image.buffer().clone()))
    }

    pub fn close(&mut self) -> Result<(), JsValue> {
        self.send(Event::Close)
    }

    pub fn activate(&mut self, tool: ToolKind) -> Result<(), JsValue> {
        self.send(Event::Activate(tool.into()))
    }

    /// Re-render the preview of `tool` with a new slider value.
    pub fn adjust_preview(&mut self, tool: ToolKind, value: i32) -> Result<(), JsValue> {
        self.send(Event::Adjust(Adjustment::new(tool.into(), value)))
    }

    pub fn confirm(&mut self, tool: ToolKind) -> Result<(), JsValue> {
        self.send(Event::Confirm(tool.into()))
    }

    pub fn cancel(&mut self, tool: ToolKind) -> Result<(), JsValue> {
        self.send(Event::Cancel(tool.into()))
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.send(Event::Reset)
    }

    /// Select a region in buffer coordinates. Returns whether anything was
    /// selected.
    pub fn select_roi(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<bool, JsValue> {
        self.send(Event::SelectRoi(Rect::new(x1, y1, x2, y2)))?;
        Ok(self.inner.selected_roi().is_some())
    }

    /// Select a region from a drag on the canvas.
    pub fn select_roi_on_canvas(
        &mut self,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
    ) -> Result<bool, JsValue> {
        self.send(Event::CanvasSelect {
            from: (from_x, from_y),
            to: (to_x, to_y),
        })?;
        Ok(self.inner.selected_roi().is_some())
    }

    /// Paste the copied fragment at a buffer position. Returns whether any
    /// pixel was written.
    pub fn paste_fragment(&mut self, x: i32, y: i32) -> Result<bool, JsValue> {
        let written = self.inner.paste_fragment(x, y).map_err(js_error)?;
        self.render()?;
        Ok(written.is_some())
    }

    /// Paste at a canvas position.
    pub fn paste_on_canvas(&mut self, x: i32, y: i32) -> Result<bool, JsValue> {
        let written = self.inner.paste_on_canvas(x, y).map_err(js_error)?;
        self.render()?;
        Ok(written.is_some())
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.displayed().is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn is_previewing(&self) -> bool {
        self.inner.is_previewing()
    }

    /// The frame currently on screen: the preview while previewing.
    pub fn presented(&self) -> Option<JsPixelBuffer> {
        self.inner.presented().cloned().map(JsPixelBuffer::from_buffer)
    }

    /// The committed image, for export.
    pub fn displayed(&self) -> Option<JsPixelBuffer> {
        self.inner.displayed().cloned().map(JsPixelBuffer::from_buffer)
    }

    /// Selected region as `{ x, y, width, height }`, or `undefined`.
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.selected_roi()).map_err(js_error)
    }

    /// Selected region on the canvas as `{ x1, y1, x2, y2 }`, or `undefined`.
    pub fn selection_on_canvas(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.selection_on_canvas()).map_err(js_error)
    }

    /// Last-used value per tool.
    pub fn settings(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.settings()).map_err(js_error)
    }

    /// Encode the committed image for `file_name`, picking the format from
    /// its extension. JPEG uses the session's configured quality.
    pub fn export(&self, file_name: &str) -> Result<Vec<u8>, JsValue> {
        self.inner.export(file_name).map_err(js_error)
    }
}

impl JsEditSession {
    fn from_config(config: EditorConfig) -> Self {
        Self {
            inner: EditSession::new(config),
            on_render: None,
        }
    }

    fn send(&mut self, event: Event) -> Result<(), JsValue> {
        let Some(callback) = self.on_render.as_ref() else {
            return self.inner.dispatch(event).map(|_| ()).map_err(js_error);
        };

        let mut presenter = CallbackPresenter {
            callback,
            error: None,
        };
        self.inner.handle(event, &mut presenter).map_err(js_error)?;
        presenter.error.map_or(Ok(()), Err)
    }

    fn render(&self) -> Result<(), JsValue> {
        if let (Some(callback), Some(frame)) = (self.on_render.as_ref(), self.inner.presented()) {
            let mut presenter = CallbackPresenter {
                callback,
                error: None,
            };
            presenter.present(frame);
            return presenter.error.map_or(Ok(()), Err);
        }
        Ok(())
    }

    /// Selected region for Rust callers.
    pub fn selected_region(&self) -> Option<Region> {
        self.inner.selected_roi()
    }
}
