// worms_engine/engine/src/world/terrain.rs
use crate::core::types::Obstruction;

/// World-supplied passability oracle.
///
/// Reports whether a circular footprint of the given radius may legally occupy
/// `(x, y)`. Implementations must be pure queries, callable at arbitrary
/// coordinates (including far outside any nominal bounds), and read-safe for
/// concurrent callers. The jump search relies on the oracle eventually
/// reporting `false` for large excursions.
pub trait Terrain: Send + Sync {
    fn is_passable(&self, x: f64, y: f64, radius: f64) -> bool;
}

impl<F> Terrain for F
where
    F: Fn(f64, f64, f64) -> bool + Send + Sync,
{
    fn is_passable(&self, x: f64, y: f64, radius: f64) -> bool {
        self(x, y, radius)
    }
}

/// Open terrain above a solid floor: passable wherever `y >= floor`.
#[derive(Debug, Clone, Copy)]
pub struct HalfPlane {
    pub floor: f64,
}

impl Terrain for HalfPlane {
    fn is_passable(&self, _x: f64, y: f64, _radius: f64) -> bool {
        y >= self.floor
    }
}

/// Rectangular field; passable iff the whole footprint lies inside the bounds.
#[derive(Debug, Clone, Copy)]
pub struct BoundedField {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Terrain for BoundedField {
    fn is_passable(&self, x: f64, y: f64, radius: f64) -> bool {
        x - radius >= self.min_x
            && x + radius <= self.max_x
            && y - radius >= self.min_y
            && y + radius <= self.max_y
    }
}

/// Bounded field with axis-aligned impassable patches inside it.
#[derive(Debug, Clone)]
pub struct ObstructionField {
    bounds: BoundedField,
    obstructions: Vec<Obstruction>,
}

impl ObstructionField {
    pub fn new(bounds: BoundedField, obstructions: Vec<Obstruction>) -> Self {
        ObstructionField { bounds, obstructions }
    }

    pub fn bounds(&self) -> &BoundedField {
        &self.bounds
    }

    pub fn obstructions(&self) -> &[Obstruction] {
        &self.obstructions
    }
}

impl Terrain for ObstructionField {
    fn is_passable(&self, x: f64, y: f64, radius: f64) -> bool {
        self.bounds.is_passable(x, y, radius)
            && self
                .obstructions
                .iter()
                .all(|patch| !patch.overlaps_circle(x, y, radius))
    }
}
