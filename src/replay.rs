//! Input trace replay.
//!
//! A trace is JSON lines, one [`InputEvent`] per line. Blank lines and lines
//! starting with `#` are ignored. Replaying a trace through a [`Viewport`]
//! reproduces a recorded interaction session without a window.

use std::io::BufRead;

use crate::error::ViewError;
use crate::input::InputEvent;
use crate::viewport::Viewport;

/// Read every event from a JSON-lines trace.
pub fn read_trace(reader: impl BufRead) -> Result<Vec<InputEvent>, ViewError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|e| ViewError::Trace {
            line: index + 1,
            message: e.to_string(),
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Feed `events` through `viewport`, calling `on_change` with the event
/// index after each one that moved the camera. Returns how many did.
#[must_use]
pub fn replay(
    viewport: &mut Viewport,
    events: &[InputEvent],
    mut on_change: impl FnMut(usize, &Viewport),
) -> usize {
    let mut changed = 0;
    for (index, event) in events.iter().enumerate() {
        if viewport.handle_input(event) {
            changed += 1;
            on_change(index, viewport);
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::camera::FrameSetup;
    use crate::input::MouseButton;
    use crate::options::Options;

    const TRACE: &str = r#"
# press, drag right 10px, release, two notches out
{"type":"pointer_down","x":0,"y":0,"button":"left"}
{"type":"pointer_move","x":10,"y":0,"buttons":["left"]}
{"type":"pointer_up","button":"left"}

{"type":"scroll","delta":-240}
{"type":"key","key":"+"}
"#;

    #[test]
    fn reads_events_and_skips_comments() {
        let events = read_trace(Cursor::new(TRACE)).unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(
            events[0],
            InputEvent::PointerDown {
                x: 0.0,
                y: 0.0,
                button: MouseButton::Left,
            }
        );
    }

    #[test]
    fn reports_line_of_bad_event() {
        let err = read_trace(Cursor::new("\n{\"type\":\"warp\"}\n")).unwrap_err();
        match err {
            ViewError::Trace { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn replay_counts_camera_changes() {
        let events = read_trace(Cursor::new(TRACE)).unwrap();
        let mut vp = Viewport::new(&Options::default(), |_: &FrameSetup| {});
        let mut seen = Vec::new();
        let changed = replay(&mut vp, &events, |i, _| seen.push(i));
        assert_eq!(changed, 3);
        assert_eq!(seen, vec![1, 3, 4]);
        let expected = 500.0 / 0.81 * 0.9;
        assert!((vp.camera().distance - expected).abs() < 1e-9);
    }
}
