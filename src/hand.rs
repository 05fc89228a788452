//! Hand landmark data structures and geometry utilities.
//!
//! Models the 21 keypoints per hand delivered by the landmark-detection
//! collaborator, in camera-normalized 2-D coordinates (y grows downward,
//! x mirrored to match the flipped camera image).  Provides the
//! pose-independent hand-size proxy and the per-finger extension tests
//! the classifiers build on.

// ── Landmark definitions ───────────────────────────────────

/// The 21 hand landmarks in standard topological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Total number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

impl HandLandmark {
    /// Convert landmark enum to array index (0-20).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

// ── Fingers ────────────────────────────────────────────────

/// The four non-thumb fingers.  The thumb is classified separately by
/// tip-to-MCP distance, not by the tip/PIP height test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Self::Index, Self::Middle, Self::Ring, Self::Pinky];

    /// Tip and PIP landmarks for this finger.
    fn joints(&self) -> (HandLandmark, HandLandmark) {
        match self {
            Self::Index => (HandLandmark::IndexTip, HandLandmark::IndexPip),
            Self::Middle => (HandLandmark::MiddleTip, HandLandmark::MiddlePip),
            Self::Ring => (HandLandmark::RingTip, HandLandmark::RingPip),
            Self::Pinky => (HandLandmark::PinkyTip, HandLandmark::PinkyPip),
        }
    }
}

// ── Points and frames ──────────────────────────────────────

/// A single landmark position in camera-normalized coordinates.
/// Conceptually [0,1] on both axes but not clamped at the source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Euclidean distance between two points in normalized space.
pub fn distance(a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// One detected hand in one video frame: exactly 21 landmark positions.
#[derive(Debug, Clone)]
pub struct HandFrame {
    points: [Point; LANDMARK_COUNT],
}

impl HandFrame {
    pub fn new(points: [Point; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Position of a landmark.
    pub fn point(&self, landmark: HandLandmark) -> Point {
        self.points[landmark.index()]
    }

    /// Distance between two landmarks on this hand.
    pub fn dist(&self, a: HandLandmark, b: HandLandmark) -> f32 {
        distance(self.point(a), self.point(b))
    }

    /// Hand size: index-MCP to pinky-MCP distance.  Insensitive to finger
    /// pose, used as a proxy for hand-to-camera proximity.
    pub fn hand_size(&self) -> f32 {
        self.dist(HandLandmark::IndexMcp, HandLandmark::PinkyMcp)
    }

    /// Whether a finger is raised: tip strictly above its PIP joint.
    pub fn finger_up(&self, finger: Finger) -> bool {
        let (tip, pip) = finger.joints();
        self.point(tip).y < self.point(pip).y
    }

    /// Whether a finger is folded: tip strictly below its PIP joint.
    /// Not the negation of `finger_up` — a tip level with its PIP is
    /// neither raised nor folded.
    pub fn finger_down(&self, finger: Finger) -> bool {
        let (tip, pip) = finger.joints();
        self.point(tip).y > self.point(pip).y
    }

    /// All four non-thumb fingers folded.
    pub fn all_fingers_down(&self) -> bool {
        Finger::ALL.iter().all(|f| self.finger_down(*f))
    }

    /// Count of raised non-thumb fingers (0-4).
    pub fn fingers_up(&self) -> u8 {
        Finger::ALL.iter().filter(|f| self.finger_up(**f)).count() as u8
    }
}

// ── Test helpers ───────────────────────────────────────────

/// Canonical hand poses for tests: a close-to-camera hand with all four
/// fingers folded and the thumb in the extend/fold dead zone, which
/// individual tests then perturb landmark by landmark.
#[cfg(test)]
pub mod testpose {
    use super::{HandFrame, HandLandmark, Point, LANDMARK_COUNT};

    /// Baseline pose.  Hand size 0.15 (close enough), fingers folded,
    /// thumb tip 0.055 from its MCP and outside the index MCP.
    pub fn base() -> HandFrame {
        let coords: [(f32, f32); LANDMARK_COUNT] = [
            (0.52, 0.72), // wrist
            (0.45, 0.68), // thumb cmc
            (0.40, 0.60), // thumb mcp
            (0.42, 0.60), // thumb ip
            (0.345, 0.60), // thumb tip
            (0.45, 0.55), // index mcp
            (0.45, 0.50), // index pip
            (0.45, 0.52), // index dip
            (0.45, 0.58), // index tip
            (0.50, 0.55), // middle mcp
            (0.50, 0.50), // middle pip
            (0.50, 0.52), // middle dip
            (0.50, 0.58), // middle tip
            (0.55, 0.55), // ring mcp
            (0.55, 0.50), // ring pip
            (0.55, 0.52), // ring dip
            (0.55, 0.58), // ring tip
            (0.60, 0.55), // pinky mcp
            (0.60, 0.50), // pinky pip
            (0.60, 0.52), // pinky dip
            (0.60, 0.58), // pinky tip
        ];
        let mut points = [Point::default(); LANDMARK_COUNT];
        for (i, (x, y)) in coords.iter().enumerate() {
            points[i] = Point { x: *x, y: *y };
        }
        HandFrame::new(points)
    }

    /// Move one landmark of a pose.
    pub fn set(frame: &mut HandFrame, landmark: HandLandmark, x: f32, y: f32) {
        frame.points[landmark.index()] = Point { x, y };
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_indices() {
        assert_eq!(HandLandmark::Wrist.index(), 0);
        assert_eq!(HandLandmark::ThumbMcp.index(), 2);
        assert_eq!(HandLandmark::ThumbTip.index(), 4);
        assert_eq!(HandLandmark::IndexMcp.index(), 5);
        assert_eq!(HandLandmark::IndexPip.index(), 6);
        assert_eq!(HandLandmark::IndexTip.index(), 8);
        assert_eq!(HandLandmark::PinkyMcp.index(), 17);
        assert_eq!(HandLandmark::PinkyTip.index(), 20);
        assert_eq!(LANDMARK_COUNT, 21);
    }

    #[test]
    fn test_distance() {
        let a = Point { x: 0.0, y: 0.0 };
        let b = Point { x: 0.3, y: 0.4 };
        assert!((distance(a, b) - 0.5).abs() < 1e-6);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_hand_size() {
        let frame = testpose::base();
        assert!((frame.hand_size() - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_fingers_up_count() {
        let mut frame = testpose::base();
        assert_eq!(frame.fingers_up(), 0);
        assert!(frame.all_fingers_down());

        testpose::set(&mut frame, HandLandmark::IndexTip, 0.45, 0.40);
        assert_eq!(frame.fingers_up(), 1);
        assert!(!frame.all_fingers_down());

        testpose::set(&mut frame, HandLandmark::MiddleTip, 0.50, 0.40);
        testpose::set(&mut frame, HandLandmark::RingTip, 0.55, 0.40);
        testpose::set(&mut frame, HandLandmark::PinkyTip, 0.60, 0.40);
        assert_eq!(frame.fingers_up(), 4);
    }

    #[test]
    fn test_finger_level_with_pip_is_neither_up_nor_down() {
        let mut frame = testpose::base();
        // Tip exactly level with the PIP (both y = 0.50).
        testpose::set(&mut frame, HandLandmark::IndexTip, 0.45, 0.50);
        assert!(!frame.finger_up(Finger::Index));
        assert!(!frame.finger_down(Finger::Index));
        assert_eq!(frame.fingers_up(), 0);
        assert!(!frame.all_fingers_down());
    }

    #[test]
    fn test_thumb_excluded_from_finger_count() {
        let mut frame = testpose::base();
        // Fully extended thumb does not change the raised-finger count.
        testpose::set(&mut frame, HandLandmark::ThumbTip, 0.30, 0.40);
        assert_eq!(frame.fingers_up(), 0);
    }
}
