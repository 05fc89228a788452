//! Pointer intents and the sink boundary.
//!
//! The engine decides `Intent` values; the injection collaborator
//! implements `IntentSink` to apply them to the OS pointer and scroll
//! subsystem.  Events are rendered as s-expressions for diagnostic sinks.

/// A discrete pointing-device action decided for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the cursor to an absolute screen position, in pixels.
    MoveCursor { x: i32, y: i32 },
    /// Single left click.
    ClickLeft,
    /// Single right click.
    ClickRight,
    /// Scroll up by the configured step.
    ScrollUp,
    /// Scroll down by the configured step.
    ScrollDown,
}

impl Intent {
    /// String representation for logging and event output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MoveCursor { .. } => "move-cursor",
            Self::ClickLeft => "click-left",
            Self::ClickRight => "click-right",
            Self::ScrollUp => "scroll-up",
            Self::ScrollDown => "scroll-down",
        }
    }
}

/// Applies intents to the pointer/scroll subsystem.
pub trait IntentSink {
    fn apply(&mut self, intent: Intent);
}

/// Render an event as an s-expression line.
pub fn format_event(event_type: &str, fields: &[(&str, &str)]) -> String {
    let mut s = format!("(:type :event :event :{}", event_type);
    for (key, val) in fields {
        s.push_str(&format!(" :{} {}", key, val));
    }
    s.push(')');
    s
}

// ── Tests ──────────────────────────────────────────────────
