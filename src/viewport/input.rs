//! Input dispatch for [`Viewport`].

use super::Viewport;
use crate::input::{InputEvent, PointerState};

impl Viewport {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// events as [`InputEvent`] variants; the viewport dispatches them
    /// through its interaction engine and executes the resulting command.
    ///
    /// Returns `true` if the camera changed.
    ///
    /// ```ignore
    /// viewport.handle_input(&InputEvent::Scroll { delta: 120.0 });
    /// ```
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let before = self.interaction.state();
        let cmd = self.interaction.handle_event(event);
        let after = self.interaction.state();

        if before != after {
            let captured = after == PointerState::Dragging;
            log::debug!(
                "pointer {}",
                if captured { "captured" } else { "released" }
            );
            for observer in &mut self.observers {
                observer.on_pointer_capture(captured);
            }
        }

        cmd.is_some_and(|cmd| self.execute(cmd))
    }
}
