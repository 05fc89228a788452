//! Camera-to-screen coordinate mapping.
//!
//! The cursor tracks a sub-region of the camera frame so the hand can
//! reach every screen edge without leaving the camera's view; positions
//! outside the region pin to the nearest edge.

/// Maps camera-normalized positions within the active region to absolute
/// screen pixels.
#[derive(Debug, Clone)]
pub struct ScreenMap {
    /// Screen width in pixels, queried from the OS at startup.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
    /// Active camera region on the x axis (min, max).
    pub region_x: (f32, f32),
    /// Active camera region on the y axis (min, max).
    pub region_y: (f32, f32),
}

impl ScreenMap {
    /// Map with the default active region, [0.1, 0.9] on both axes.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            region_x: (0.1, 0.9),
            region_y: (0.1, 0.9),
        }
    }

    /// Normalize against the active region, clamp to [0, 1], scale to
    /// pixels, truncate.  The region's max edge maps to exactly
    /// width/height, matching the injection sink's absolute-move contract.
    pub fn map(&self, cam_x: f32, cam_y: f32) -> (i32, i32) {
        let (x_min, x_max) = self.region_x;
        let (y_min, y_max) = self.region_y;
        let norm_x = ((cam_x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
        let norm_y = ((cam_y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
        (
            (norm_x * self.width as f32) as i32,
            (norm_y * self.height as f32) as i32,
        )
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_center_maps_to_screen_center() {
        let map = ScreenMap::new(1920, 1080);
        assert_eq!(map.map(0.5, 0.5), (960, 540));
    }

    #[test]
    fn test_outside_region_clamps_to_edges() {
        let map = ScreenMap::new(1920, 1080);
        // Left/top of the region pins to the origin, not negative pixels.
        assert_eq!(map.map(0.05, 0.02), (0, 0));
        // Right/bottom pins to the far edge rather than extrapolating.
        assert_eq!(map.map(0.95, 1.2), (1920, 1080));
    }

    #[test]
    fn test_truncates_toward_zero() {
        let map = ScreenMap::new(100, 100);
        // norm 0.375 * 100 = 37.5 -> 37
        assert_eq!(map.map(0.4, 0.4), (37, 37));
    }

    #[test]
    fn test_region_bounds_map_to_screen_bounds() {
        let map = ScreenMap::new(1920, 1080);
        assert_eq!(map.map(0.1, 0.1), (0, 0));
        assert_eq!(map.map(0.9, 0.9), (1920, 1080));
    }
}
