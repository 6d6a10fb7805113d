use stickworld::{
    BounceMode, Boundary, NoOpStepObserver, Particle, SimConfig, Simulation, Vec2, World,
};

fn still_config() -> SimConfig<f32> {
    SimConfig::new().with_gravity(0.0).with_friction(1.0)
}

#[test]
fn integration_matches_position_formula() {
    let mut p = Particle::with_prev(Vec2::new(10.0f32, 10.0), Vec2::new(5.0, 5.0));
    p.integrate(0.0, 1.0);
    assert_eq!(p.pos, Vec2::new(15.0, 15.0));
    assert_eq!(p.prev_pos, Vec2::new(10.0, 10.0));
}

#[test]
fn integration_uses_default_friction_and_gravity() {
    let config: SimConfig<f64> = SimConfig::default();
    let mut p = Particle::with_prev(Vec2::new(100.0, 100.0), Vec2::new(90.0, 96.0));
    p.integrate(config.gravity, config.friction);
    let expected_x = 100.0 + 10.0 * 0.995;
    let expected_y = 100.0 + 4.0 * 0.995 + 0.5;
    assert!((p.pos.x - expected_x).abs() < 1e-9, "x = {}, expected {}", p.pos.x, expected_x);
    assert!((p.pos.y - expected_y).abs() < 1e-9, "y = {}, expected {}", p.pos.y, expected_y);
    assert_eq!(p.prev_pos, Vec2::new(100.0, 100.0));
}

#[test]
fn pinned_particles_ignore_integration_and_walls() {
    let boundary = Boundary::new(500.0f32, 500.0, 0.9, BounceMode::Mirror);
    let inside = Particle::pinned(Vec2::new(20.0f32, 20.0));
    let outside = Particle::pinned(Vec2::new(-30.0f32, 620.0));

    for original in [inside, outside] {
        let mut p = original.clone();
        p.integrate(0.5, 0.995);
        boundary.resolve(&mut p);
        assert_eq!(p, original);
    }
}

#[test]
fn resting_particle_stays_put_without_forces() {
    let mut world = World::empty();
    let id = world.add_particle(Particle::new(Vec2::new(250.0f32, 250.0)));
    let mut sim = Simulation::new(world, still_config()).unwrap();

    for _ in 0..1000 {
        sim.step(&mut NoOpStepObserver);
    }

    let p = sim.world().particle(id).unwrap();
    assert_eq!(p.pos, Vec2::new(250.0, 250.0));
    assert_eq!(p.prev_pos, Vec2::new(250.0, 250.0));
}

#[test]
fn free_fall_accelerates_by_gravity_each_step() {
    let mut world = World::empty();
    let id = world.add_particle(Particle::new(Vec2::new(100.0f64, 0.0)));
    let config = SimConfig::new().with_friction(1.0).with_gravity(0.5);
    let mut sim = Simulation::new(world, config).unwrap();

    for _ in 0..10 {
        sim.step(&mut NoOpStepObserver);
    }

    // Sum of 0.5 * k for k = 1..=10.
    let y = sim.world().particle(id).unwrap().pos.y;
    assert!((y - 27.5).abs() < 1e-9, "y = {}", y);
}
