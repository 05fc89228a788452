//! Gesture classifiers over a single hand frame.
//!
//! Pure predicates: thumbs-up (control-mode entry), fist (control-mode
//! exit), and thumb tuck (sub-mode selection).  Thresholds are passed in
//! from `EngineConfig` so each predicate is testable in isolation; the
//! engine owns all state and logging.

use crate::hand::{HandFrame, HandLandmark};

/// Thumb extended past `extend_threshold` (tip-to-MCP distance) with all
/// four other fingers folded.  The control-mode entry gesture; while held
/// it is neutral and produces no other intent.
pub fn thumbs_up(frame: &HandFrame, extend_threshold: f32) -> bool {
    let thumb_dist = frame.dist(HandLandmark::ThumbTip, HandLandmark::ThumbMcp);
    thumb_dist > extend_threshold && frame.all_fingers_down()
}

/// Thumb folded under `fold_threshold` with all four other fingers folded.
/// The control-mode exit gesture.  With the default thresholds a thumb
/// distance in (0.05, 0.06) matches neither this nor `thumbs_up`; that
/// dead zone is intentional.
pub fn fist(frame: &HandFrame, fold_threshold: f32) -> bool {
    let thumb_dist = frame.dist(HandLandmark::ThumbTip, HandLandmark::ThumbMcp);
    thumb_dist < fold_threshold && frame.all_fingers_down()
}

/// Thumb tucked toward the palm: tip past the index MCP on the mirrored
/// x axis.  Tucked selects the Mouse sub-mode; outside selects
/// Click/Scroll.
pub fn thumb_in(frame: &HandFrame) -> bool {
    frame.point(HandLandmark::ThumbTip).x > frame.point(HandLandmark::IndexMcp).x
}

// ── Tests ──────────────────────────────────────────────────
