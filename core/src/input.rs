//! Decoded input events consumed by the kiosk.
//!
//! The cabinet hardware (joystick, buttons, service keys) is decoded by an
//! external collaborator; the core only ever sees one [`InputFrame`] of
//! edge-triggered booleans per tick.

use anyhow::Result;

/// One tick's worth of decoded input.
///
/// Every field is edge-triggered: `true` means the control was pressed since
/// the previous frame, not that it is currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Primary action button (launch, dialog confirm, name-entry commit).
    pub confirm: bool,
    /// Secondary action button. Reserved by input profiles; the core flows
    /// currently ignore it.
    pub cancel: bool,
    /// Service control asking to leave the kiosk (opens the exit dialog).
    pub quit: bool,
}

/// Source of decoded input frames.
///
/// Implementations own their own pacing: a hardware-backed source blocks for
/// up to one tick interval and returns an all-false frame when nothing was
/// pressed, so the kiosk loop keeps ticking at a steady rate.
pub trait InputSource {
    fn next_frame(&mut self) -> Result<InputFrame>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_is_all_released() {
        let frame = InputFrame::default();
        assert!(!frame.up);
        assert!(!frame.down);
        assert!(!frame.left);
        assert!(!frame.right);
        assert!(!frame.confirm);
        assert!(!frame.cancel);
        assert!(!frame.quit);
    }
}
