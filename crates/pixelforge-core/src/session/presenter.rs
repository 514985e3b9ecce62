//! Rendering seam between the session and the shell.

use crate::buffer::PixelBuffer;

/// Receives every frame the session wants shown.
pub trait Presenter {
    fn present(&mut self, frame: &PixelBuffer);
}

impl<F> Presenter for F
where
    F: FnMut(&PixelBuffer),
{
    fn present(&mut self, frame: &PixelBuffer) {
        self(frame)
    }
}
