use std::io::{self, Write};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

/// Mouse capture (and bracketed paste) for as long as the guard lives
///
/// Clicks outside the suggestion list are only seen while capture is on, so
/// the guard is created with the event loop and dropped with it.
pub struct MouseCaptureGuard<W: Write> {
    writer: W,
}

impl<W: Write> MouseCaptureGuard<W> {
    pub fn new(mut writer: W) -> io::Result<Self> {
        execute!(writer, EnableMouseCapture, EnableBracketedPaste)?;
        log::debug!("Mouse capture enabled");
        Ok(Self { writer })
    }
}

impl<W: Write> Drop for MouseCaptureGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.writer, DisableBracketedPaste, DisableMouseCapture) {
            log::warn!("Failed to disable mouse capture: {}", e);
        } else {
            log::debug!("Mouse capture disabled");
        }
    }
}
