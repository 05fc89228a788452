//! Gesture-to-intent engine — the mode and intent state machine.
//!
//! Consumes classified hand frames one tick at a time and decides pointer
//! intents: cursor motion, clicks, directional scrolling.  A thumbs-up
//! close to the camera arms control mode; a fist disarms it.  Within
//! control mode the thumb tuck selects between the Mouse sub-mode
//! (smoothed cursor plus pinch clicks) and the Click/Scroll sub-mode
//! (finger-count clicks, extension and pinch scrolling).  All numeric
//! thresholds live in `EngineConfig`.

use tracing::{debug, info};

use crate::gesture;
use crate::hand::{Finger, HandFrame, HandLandmark};
use crate::intent::Intent;
use crate::screen::ScreenMap;
use crate::smoothing::PositionSmoother;

// ── Config ─────────────────────────────────────────────────

/// Thresholds and timing for gesture recognition.  Fixed at startup, not
/// runtime-mutable.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Samples in the cursor smoothing window.
    pub smoothing_frames: usize,
    /// Minimum hand size (index-MCP to pinky-MCP distance) for any input
    /// to be accepted; smaller hands are too far from the camera.
    pub min_hand_size: f32,
    /// Thumb tip-to-MCP distance above which the thumb counts as extended
    /// (thumbs-up).
    pub thumb_extend_threshold: f32,
    /// Thumb tip-to-MCP distance below which the thumb counts as folded
    /// (fist).  The gap up to `thumb_extend_threshold` is a deliberate
    /// dead zone where neither gesture matches.
    pub thumb_fold_threshold: f32,
    /// Index tip-to-MCP distance above which the raised finger counts as
    /// extended for upward scrolling.
    pub scroll_extend_threshold: f32,
    /// Thumb-to-index pinch distance below which downward scrolling
    /// engages.
    pub scroll_pinch_threshold: f32,
    /// Minimum interval between scroll emissions, in seconds.
    pub scroll_interval_s: f64,
    /// Thumb-to-fingertip pinch distance for clicks in the Mouse sub-mode.
    pub click_pinch_threshold: f32,
    /// Scroll magnitude handed to the sink, in wheel units.
    pub scroll_step: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            smoothing_frames: 5,
            min_hand_size: 0.12,
            thumb_extend_threshold: 0.06,
            thumb_fold_threshold: 0.05,
            scroll_extend_threshold: 0.18,
            scroll_pinch_threshold: 0.06,
            scroll_interval_s: 0.15,
            click_pinch_threshold: 0.05,
            scroll_step: 20,
        }
    }
}

// ── Observation types ──────────────────────────────────────

/// Direction of an engaged scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Which behavior path the last qualifying hand took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMode {
    /// Control mode off, or no qualifying hand yet.
    Idle,
    /// Thumb tucked: smoothed cursor motion plus pinch clicks.
    Mouse,
    /// Thumb outside: finger-count clicks and scrolling.
    ClickScroll,
}

impl SubMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Mouse => "mouse",
            Self::ClickScroll => "click-scroll",
        }
    }
}

/// Distances measured for the most recent hand, exposed for diagnostic
/// overlays.
#[derive(Debug, Clone, Copy, Default)]
pub struct Measurements {
    /// Index-MCP to pinky-MCP distance (camera-proximity proxy).
    pub hand_size: f32,
    /// Index tip-to-MCP distance (scroll-up extension).
    pub finger_dist: f32,
    /// Thumb-to-index tip distance (pinch).
    pub pinch_dist: f32,
}

// ── Engine ─────────────────────────────────────────────────

/// Central engine state.  Owned by the tick loop and mutated only there;
/// lives for the whole process.
pub struct Engine {
    /// Configuration.
    pub config: EngineConfig,
    /// Camera-to-screen mapping.
    pub screen: ScreenMap,
    /// Master gate: no click/scroll/cursor intent is produced while off.
    pub control_mode: bool,
    /// A scroll pattern was matched by the last qualifying hand.
    pub scroll_mode_active: bool,
    /// Direction currently engaged, None while below the scroll
    /// thresholds.
    pub scroll_state: Option<ScrollDirection>,
    /// The cursor is following the hand (set on the Mouse path, cleared
    /// on the Click path).
    pub mouse_mode: bool,
    /// Click latch: suppresses repeat clicks while the triggering pose is
    /// held.
    pub click_done: bool,
    /// Wall-clock time of the last emitted scroll, seconds.
    pub last_scroll_time: f64,
    /// Wall-clock time of the last emitted intent or mode toggle, seconds.
    pub last_action_time: f64,
    /// Behavior path taken by the last qualifying hand.
    pub sub_mode: SubMode,
    /// Smoothing window over recent thumb-MCP positions.
    pub smoother: PositionSmoother,
    /// Last cursor position sent, in screen pixels.
    pub cursor: (i32, i32),
    /// Last measured distances, for diagnostic output.
    pub measurements: Measurements,
}

impl Engine {
    /// Create an engine with all-default state; constructed once at
    /// startup.
    pub fn new(config: EngineConfig, screen: ScreenMap) -> Self {
        let smoother = PositionSmoother::new(config.smoothing_frames);
        Self {
            config,
            screen,
            control_mode: false,
            scroll_mode_active: false,
            scroll_state: None,
            mouse_mode: false,
            click_done: false,
            last_scroll_time: 0.0,
            last_action_time: 0.0,
            sub_mode: SubMode::Idle,
            smoother,
            cursor: (0, 0),
            measurements: Measurements::default(),
        }
    }

    /// Process one tick: every detected hand in detection order, all
    /// sharing this engine's state.  A later hand can override an earlier
    /// hand's toggle within the same tick (last-write-wins).
    pub fn update(&mut self, hands: &[HandFrame], now_s: f64) -> Vec<Intent> {
        let mut intents = Vec::new();
        for frame in hands {
            intents.extend(self.update_hand(frame, now_s));
        }
        intents
    }

    /// Process a single hand for one tick and return the intents it
    /// produced.  `now_s` is monotonic wall-clock seconds supplied by the
    /// caller; the engine never reads a clock itself.
    pub fn update_hand(&mut self, frame: &HandFrame, now_s: f64) -> Vec<Intent> {
        let mut intents = Vec::new();

        let hand_size = frame.hand_size();
        let close_enough = hand_size > self.config.min_hand_size;
        self.measurements.hand_size = hand_size;

        let is_thumbs_up = gesture::thumbs_up(frame, self.config.thumb_extend_threshold);

        // ── Control-mode toggle, evaluated every tick ──
        if close_enough && is_thumbs_up {
            if !self.control_mode {
                self.control_mode = true;
                info!("control mode on (hand_size={:.3})", hand_size);
            }
            self.last_action_time = now_s;
        }
        if gesture::fist(frame, self.config.thumb_fold_threshold) && self.control_mode {
            self.control_mode = false;
            self.sub_mode = SubMode::Idle;
            info!("control mode off (fist)");
        }

        // Thumbs-up is a neutral hold: it arms the mode but never acts.
        if !(self.control_mode && close_enough && !is_thumbs_up) {
            return intents;
        }

        let thumb_outside = !gesture::thumb_in(frame);
        let fingers = frame.fingers_up();

        let others_down = frame.finger_down(Finger::Middle)
            && frame.finger_down(Finger::Ring)
            && frame.finger_down(Finger::Pinky);

        let finger_dist = frame.dist(HandLandmark::IndexTip, HandLandmark::IndexMcp);
        let pinch_dist = frame.dist(HandLandmark::ThumbTip, HandLandmark::IndexTip);
        self.measurements.finger_dist = finger_dist;
        self.measurements.pinch_dist = pinch_dist;

        if thumb_outside && fingers == 1 {
            // ── Scroll up: one raised finger, extended past threshold ──
            self.scroll_mode_active = true;
            self.sub_mode = SubMode::ClickScroll;
            if finger_dist > self.config.scroll_extend_threshold {
                self.scroll_state = Some(ScrollDirection::Up);
                if now_s - self.last_scroll_time > self.config.scroll_interval_s {
                    debug!("scroll up (finger={:.3})", finger_dist);
                    intents.push(Intent::ScrollUp);
                    self.last_scroll_time = now_s;
                    self.last_action_time = now_s;
                }
            } else {
                self.scroll_state = None;
            }
            self.click_done = false;
        } else if pinch_dist < self.config.scroll_pinch_threshold && others_down {
            // ── Scroll down: thumb-index pinch, remaining fingers folded ──
            self.scroll_mode_active = true;
            self.sub_mode = SubMode::ClickScroll;
            self.scroll_state = Some(ScrollDirection::Down);
            if now_s - self.last_scroll_time > self.config.scroll_interval_s {
                debug!("scroll down (pinch={:.3})", pinch_dist);
                intents.push(Intent::ScrollDown);
                self.last_scroll_time = now_s;
                self.last_action_time = now_s;
            }
            self.click_done = false;
        } else if thumb_outside {
            // ── Click path: raised-finger count selects the button ──
            self.scroll_mode_active = false;
            self.scroll_state = None;
            self.mouse_mode = false;
            self.sub_mode = SubMode::ClickScroll;
            self.smoother.clear();

            match fingers {
                2 => {
                    if !self.click_done {
                        debug!("left click (two fingers)");
                        intents.push(Intent::ClickLeft);
                        self.click_done = true;
                        self.last_action_time = now_s;
                    }
                }
                3 => {
                    if !self.click_done {
                        debug!("right click (three fingers)");
                        intents.push(Intent::ClickRight);
                        self.click_done = true;
                        self.last_action_time = now_s;
                    }
                }
                _ => {
                    // Zero or four raised fingers re-arms the click latch.
                    self.click_done = false;
                }
            }
        } else {
            // ── Mouse path: thumb tucked, cursor follows the thumb MCP ──
            self.scroll_mode_active = false;
            self.scroll_state = None;
            self.mouse_mode = true;
            self.sub_mode = SubMode::Mouse;

            let anchor = frame.point(HandLandmark::ThumbMcp);
            self.smoother.push(anchor.x, anchor.y);
            if let Some((avg_x, avg_y)) = self.smoother.average() {
                let (x, y) = self.screen.map(avg_x, avg_y);
                self.cursor = (x, y);
                intents.push(Intent::MoveCursor { x, y });
            }

            // Pinch clicks may fire in the same tick as the move.
            let pinch_index = pinch_dist;
            let pinch_middle = frame.dist(HandLandmark::ThumbTip, HandLandmark::MiddleTip);
            if pinch_index < self.config.click_pinch_threshold {
                if !self.click_done {
                    debug!("left click (index pinch={:.3})", pinch_index);
                    intents.push(Intent::ClickLeft);
                    self.click_done = true;
                    self.last_action_time = now_s;
                }
            } else if pinch_middle < self.config.click_pinch_threshold {
                if !self.click_done {
                    debug!("right click (middle pinch={:.3})", pinch_middle);
                    intents.push(Intent::ClickRight);
                    self.click_done = true;
                    self.last_action_time = now_s;
                }
            } else {
                self.click_done = false;
            }
        }

        intents
    }

    /// Reset to the freshly-constructed state, keeping config and screen.
    pub fn reset(&mut self) {
        self.control_mode = false;
        self.scroll_mode_active = false;
        self.scroll_state = None;
        self.mouse_mode = false;
        self.click_done = false;
        self.last_scroll_time = 0.0;
        self.last_action_time = 0.0;
        self.sub_mode = SubMode::Idle;
        self.smoother.clear();
        self.cursor = (0, 0);
        self.measurements = Measurements::default();
    }

    /// Generate an s-expression describing the current engine state, for
    /// diagnostic overlays and the `--status` shell flag.
    pub fn status_sexp(&self) -> String {
        format!(
            "(:control {} :sub-mode :{} :scroll {} :mouse {} :cursor ({} {}) :window {} :hand-size {:.3} :finger {:.3} :pinch {:.3})",
            if self.control_mode { "t" } else { "nil" },
            self.sub_mode.as_str(),
            self.scroll_state
                .map(|s| format!(":{}", s.as_str()))
                .unwrap_or_else(|| "nil".to_string()),
            if self.mouse_mode { "t" } else { "nil" },
            self.cursor.0,
            self.cursor.1,
            self.smoother.len(),
            self.measurements.hand_size,
            self.measurements.finger_dist,
            self.measurements.pinch_dist,
        )
    }
}

// ── Test poses ─────────────────────────────────────────────

#[cfg(test)]
use crate::hand::testpose::{base, set};
#[cfg(test)]
use crate::hand::HandLandmark as L;

/// Thumbs-up: thumb tip 0.076 from its MCP, all fingers folded.
#[cfg(test)]
fn thumbs_up_pose() -> HandFrame {
    let mut f = base();
    set(&mut f, L::ThumbTip, 0.33, 0.57);
    f
}

/// Fist: thumb tip 0.041 from its MCP, all fingers folded.
#[cfg(test)]
fn fist_pose() -> HandFrame {
    let mut f = base();
    set(&mut f, L::ThumbTip, 0.44, 0.61);
    f
}

/// Raise a finger tip well above its PIP.
#[cfg(test)]
fn raise(f: &mut HandFrame, finger: Finger) {
    match finger {
        Finger::Index => set(f, L::IndexTip, 0.45, 0.40),
        Finger::Middle => set(f, L::MiddleTip, 0.50, 0.40),
        Finger::Ring => set(f, L::RingTip, 0.55, 0.40),
        Finger::Pinky => set(f, L::PinkyTip, 0.60, 0.40),
    }
}

/// Shrink the hand below the proximity threshold (size 0.08).
#[cfg(test)]
fn far(f: &mut HandFrame) {
    set(f, L::PinkyMcp, 0.53, 0.55);
}

/// Index raised and extended (0.20 from its MCP), thumb outside.
#[cfg(test)]
fn scroll_up_pose() -> HandFrame {
    let mut f = base();
    set(&mut f, L::IndexTip, 0.45, 0.35);
    f
}

/// Thumb-index pinch (0.005 apart) with middle/ring/pinky folded.
#[cfg(test)]
fn scroll_down_pose() -> HandFrame {
    let mut f = base();
    set(&mut f, L::IndexTip, 0.35, 0.60);
    f
}

/// Two fingers raised, thumb outside.
#[cfg(test)]
fn click_left_pose() -> HandFrame {
    let mut f = base();
    raise(&mut f, Finger::Index);
    raise(&mut f, Finger::Middle);
    f
}

/// Three fingers raised, thumb outside.
#[cfg(test)]
fn click_right_pose() -> HandFrame {
    let mut f = click_left_pose();
    raise(&mut f, Finger::Ring);
    f
}

/// All four fingers raised, thumb outside: re-arms the click latch.
#[cfg(test)]
fn rearm_pose() -> HandFrame {
    let mut f = click_right_pose();
    raise(&mut f, Finger::Pinky);
    f
}

/// Thumb tucked inside the index MCP, index and middle raised so neither
/// pinch distance is under the click threshold.
#[cfg(test)]
fn mouse_pose() -> HandFrame {
    let mut f = base();
    set(&mut f, L::ThumbTip, 0.455, 0.595);
    raise(&mut f, Finger::Index);
    raise(&mut f, Finger::Middle);
    f
}

/// Thumb tucked, index tip pinched to the thumb, middle raised to keep
/// the scroll-down pattern from matching first.
#[cfg(test)]
fn mouse_left_click_pose() -> HandFrame {
    let mut f = base();
    set(&mut f, L::ThumbTip, 0.455, 0.595);
    set(&mut f, L::IndexTip, 0.46, 0.59);
    raise(&mut f, Finger::Middle);
    f
}

/// Thumb tucked, middle tip pinched to the thumb, index raised.
#[cfg(test)]
fn mouse_right_click_pose() -> HandFrame {
    let mut f = mouse_pose();
    set(&mut f, L::MiddleTip, 0.46, 0.60);
    f
}

// ── Tests ──────────────────────────────────────────────────
