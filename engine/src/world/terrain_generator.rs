// worms_engine/engine/src/world/terrain_generator.rs
use crate::core::constants::*;
use crate::core::types::Obstruction;
use crate::world::terrain::{BoundedField, ObstructionField};
use rand::Rng;

pub struct TerrainGenerator;

impl TerrainGenerator {
    /// Builds the default battlefield: the world extent walled off by border
    /// patches, with sparse cover blocks scattered over the interior.
    pub fn generate_battlefield(rng: &mut impl Rng) -> ObstructionField {
        let bounds = BoundedField {
            min_x: WORLD_MIN_X,
            max_x: WORLD_MAX_X,
            min_y: WORLD_MIN_Y,
            max_y: WORLD_MAX_Y,
        };

        let mut obstructions = Vec::new();
        obstructions.extend(Self::create_border_obstructions());
        obstructions.extend(Self::create_scattered_cover(rng));

        ObstructionField::new(bounds, obstructions)
    }

    fn create_border_obstructions() -> Vec<Obstruction> {
        let thickness = BORDER_THICKNESS;
        vec![
            Obstruction::new(
                WORLD_MIN_X,
                WORLD_MIN_Y,
                WORLD_MAX_X - WORLD_MIN_X,
                thickness,
            ),
            Obstruction::new(
                WORLD_MIN_X,
                WORLD_MAX_Y - thickness,
                WORLD_MAX_X - WORLD_MIN_X,
                thickness,
            ),
            Obstruction::new(
                WORLD_MIN_X,
                WORLD_MIN_Y,
                thickness,
                WORLD_MAX_Y - WORLD_MIN_Y,
            ),
            Obstruction::new(
                WORLD_MAX_X - thickness,
                WORLD_MIN_Y,
                thickness,
                WORLD_MAX_Y - WORLD_MIN_Y,
            ),
        ]
    }

    fn create_scattered_cover(rng: &mut impl Rng) -> Vec<Obstruction> {
        let margin = BORDER_THICKNESS + COVER_BLOCK_MAX_SIZE;
        let mut cover = Vec::with_capacity(COVER_BLOCK_COUNT);
        for _ in 0..COVER_BLOCK_COUNT {
            let width = rng.gen_range(COVER_BLOCK_MIN_SIZE..COVER_BLOCK_MAX_SIZE);
            let height = rng.gen_range(COVER_BLOCK_MIN_SIZE..COVER_BLOCK_MAX_SIZE);
            let x = rng.gen_range(WORLD_MIN_X + margin..WORLD_MAX_X - margin);
            let y = rng.gen_range(WORLD_MIN_Y + margin..WORLD_MAX_Y - margin);
            cover.push(Obstruction::new(x, y, width, height));
        }
        cover
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::terrain::Terrain;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn battlefield_has_borders_and_cover() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = TerrainGenerator::generate_battlefield(&mut rng);
        assert_eq!(field.obstructions().len(), 4 + COVER_BLOCK_COUNT);

        // Borders make the rim impassable, the open interior is not.
        assert!(!field.is_passable(WORLD_MIN_X + 1.0, WORLD_MIN_Y + 1.0, 0.5));
        assert!(!field.is_passable(100.0, WORLD_MAX_Y - 1.0, 0.5));
    }

    #[test]
    fn cover_blocks_stay_inside_the_borders() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = TerrainGenerator::generate_battlefield(&mut rng);
        for patch in &field.obstructions()[4..] {
            assert!(patch.x > WORLD_MIN_X + BORDER_THICKNESS);
            assert!(patch.x + patch.width < WORLD_MAX_X - BORDER_THICKNESS);
            assert!(patch.y > WORLD_MIN_Y + BORDER_THICKNESS);
            assert!(patch.y + patch.height < WORLD_MAX_Y - BORDER_THICKNESS);
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let first = TerrainGenerator::generate_battlefield(&mut StdRng::seed_from_u64(3));
        let second = TerrainGenerator::generate_battlefield(&mut StdRng::seed_from_u64(3));
        assert_eq!(first.obstructions(), second.obstructions());
    }
}
