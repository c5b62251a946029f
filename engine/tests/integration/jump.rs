// worms_engine/engine/tests/integration/jump.rs

use worms_engine_core::core::config::SimulationConfig;
use worms_engine_core::core::constants::GRAVITY;
use worms_engine_core::world::terrain::HalfPlane;
use worms_engine_core::{EngineError, World};

use once_cell::sync::Lazy;
use std::f64::consts::PI;
use std::sync::Arc;
use tracing::info;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
});

fn setup_flat_world() -> Arc<World> {
    Lazy::force(&TRACING);
    World::with_terrain(Arc::new(HalfPlane { floor: 0.0 }))
}

#[test]
fn jump_lands_at_projectile_range() {
    let world = setup_flat_world();
    let handle = world.spawn_mobile(0.0, 0.0, 0.5, PI / 4.0).expect("spawn");

    let delta = 0.01;
    {
        let mut object = handle.write();
        object.set_velocity(10.0).expect("mobile");
        object.jump(delta).expect("jump");
    }

    let object = handle.read();
    let velocity = 10.0;
    let angle = PI / 4.0;
    let expected_range = 2.0 * velocity * velocity * angle.sin() * angle.cos() / GRAVITY;
    info!(
        "landed at ({}, {}), analytic range {}",
        object.x(),
        object.y(),
        expected_range
    );

    // One delta step moves the entity at most |v| * delta horizontally and a
    // comparable amount vertically near landing; allow that much slack.
    assert!((object.x() - expected_range).abs() < 0.15);
    assert!(object.y().abs() < 0.1);
    assert!((object.air_time().unwrap() - 2.0 * velocity * angle.sin() / GRAVITY).abs() < 0.02);
}

#[test]
fn jump_time_brackets_the_terrain_boundary() {
    let world = setup_flat_world();
    let handle = world.spawn_mobile(0.0, 5.0, 0.5, PI / 2.0).expect("spawn");
    handle.write().set_velocity(10.0).expect("mobile");

    let delta = 0.01;
    let object = handle.read();
    let t_star = object.jump_time(delta).expect("search terminates");
    assert!(t_star > 0.0);

    let (_, y_before) = object.jump_step(t_star - delta).expect("mobile");
    let (_, y_after) = object.jump_step(t_star).expect("mobile");
    assert!(world.is_passable(0.0, y_before, 0.5));
    assert!(!world.is_passable(0.0, y_after, 0.5));
}

#[test]
fn obstructed_start_terminates_immediately() {
    let world = setup_flat_world();
    // Below the floor: valid position (finite), but not passable.
    let handle = world.spawn_mobile(3.0, -1.0, 0.5, PI / 4.0).expect("spawn");
    handle.write().set_velocity(10.0).expect("mobile");

    assert_eq!(handle.read().jump_time(0.01).expect("search"), 0.0);

    handle.write().jump(0.01).expect("jump");
    let object = handle.read();
    assert_eq!(object.x(), 3.0);
    assert_eq!(object.y(), -1.0);
    assert_eq!(object.air_time().unwrap(), 0.0);
}

#[test]
fn runaway_search_is_bounded_by_config() {
    Lazy::force(&TRACING);
    let config = SimulationConfig { max_jump_steps: 50, ..Default::default() };
    // Passable everywhere: the search can never observe an obstruction.
    let world = World::new(Arc::new(|_x: f64, _y: f64, _r: f64| true), config);
    let handle = world.spawn_mobile(0.0, 0.0, 0.5, PI / 4.0).expect("spawn");
    handle.write().set_velocity(10.0).expect("mobile");

    let err = handle.read().jump_time(0.01).unwrap_err();
    assert!(matches!(err, EngineError::SimulationDiverged { steps: 50, .. }));
}

#[test]
fn destroy_lifecycle_end_to_end() {
    let world = setup_flat_world();
    let handle = world.spawn_mobile(0.0, 0.0, 0.5, 0.0).expect("spawn");
    let id = handle.read().id();
    assert_eq!(world.object_count(), 1);

    handle.write().destroy().expect("destroy");

    let object = handle.read();
    assert!(!object.is_active());
    assert!(object.world().is_none());
    assert!(!world.contains(id));
    assert_eq!(world.object_count(), 0);
    drop(object);

    // A destroyed entity can no longer jump.
    assert!(matches!(
        handle.write().jump(0.01),
        Err(EngineError::UnreachableWorld(got)) if got == id
    ));
}

#[test]
fn jump_after_world_is_dropped_fails_cleanly() {
    let world = setup_flat_world();
    let handle = world.spawn_mobile(0.0, 0.0, 0.5, PI / 4.0).expect("spawn");
    handle.write().set_velocity(10.0).expect("mobile");
    drop(world);

    assert!(matches!(
        handle.write().jump(0.01),
        Err(EngineError::UnreachableWorld(_))
    ));
}
