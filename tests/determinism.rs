use stickworld::{presets, BounceMode, ClothConfig, NoOpStepObserver, SimConfig, Simulation, Vec2};

fn run(mode: BounceMode) -> Vec<Vec2<f32>> {
    let world = presets::cloth(Vec2::new(120.0f32, 30.0), &ClothConfig::default());
    let config = SimConfig::new().with_bounce_mode(mode);
    let mut sim = Simulation::new(world, config).unwrap();
    sim.pointer_pressed(Vec2::new(395.0, 255.0));
    for frame in 0..240 {
        if frame < 60 {
            sim.pointer_moved(Vec2::new(395.0 + frame as f32 * 3.0, 255.0 + frame as f32 * 4.0));
        } else if frame == 60 {
            sim.pointer_released();
        }
        sim.step(&mut NoOpStepObserver);
    }
    sim.world().positions()
}

#[test]
fn cloth_runs_are_bit_identical() {
    for mode in [BounceMode::Mirror, BounceMode::Clamp] {
        let results: Vec<_> = (0..5).map(|_| run(mode)).collect();
        for r in &results[1..] {
            for (a, b) in results[0].iter().zip(r.iter()) {
                assert_eq!(a.x, b.x);
                assert_eq!(a.y, b.y);
            }
        }
    }
}
