// worms_engine/engine/src/core/types.rs

pub type EntityId = u64;

// --- Basic Geometric Types ---
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self { Vec2 { x, y } }
    pub fn zero() -> Self { Vec2 { x: 0.0, y: 0.0 } }
}

/// Axis-aligned rectangular patch of impassable terrain.
///
/// `(x, y)` is the lower-left corner; the patch spans `width` along X and
/// `height` along Y.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Obstruction {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstruction {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Obstruction { x, y, width, height }
    }

    /// Whether a circular footprint centered at `(cx, cy)` overlaps this patch.
    pub fn overlaps_circle(&self, cx: f64, cy: f64, radius: f64) -> bool {
        let nearest_x = cx.clamp(self.x, self.x + self.width);
        let nearest_y = cy.clamp(self.y, self.y + self.height);
        let dx = cx - nearest_x;
        let dy = cy - nearest_y;
        dx * dx + dy * dy <= radius * radius
    }
}
