use stickworld::{
    presets, BounceMode, ClothConfig, NoOpStepObserver, PointerEvent, Scenario, SimConfig,
    Simulation, Vec2, World,
};
use wasm_bindgen::prelude::*;

/// Scenario names accepted by [`StickDemo::load`].
const SCENARIOS: [&str; 4] = ["rope", "cloth", "box", "hinge"];

fn build_scenario(name: &str) -> Option<World<f32>> {
    match name {
        "rope" => Some(presets::rope(
            Vec2::new(100.0, 40.0),
            Vec2::new(400.0, 40.0),
            20,
        )),
        "cloth" => Some(presets::cloth(
            Vec2::new(110.0, 30.0),
            &ClothConfig { cols: 12, rows: 10, spacing: 25.0, pin_every: 3 },
        )),
        "box" => Some(presets::square(Vec2::new(150.0, 80.0), 100.0, 6.0)),
        // Two bars sharing a free joint, hung from a fixed anchor.
        "hinge" => Scenario::new("hinge")
            .pinned_point("anchor", 250.0, 60.0)
            .point("elbow", 350.0, 60.0)
            .point("hand", 350.0, 160.0)
            .stick("anchor", "elbow")
            .stick("elbow", "hand")
            .build()
            .ok(),
        _ => None,
    }
}

fn flatten(points: impl Iterator<Item = Vec2<f32>>) -> Vec<f32> {
    let mut out = Vec::new();
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

// ---- Stick world demo ----

#[wasm_bindgen]
pub struct StickDemo {
    sim: Simulation<f32>,
    current: String,
}

#[wasm_bindgen]
impl StickDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(clamp_bounce: bool) -> Result<StickDemo, JsError> {
        let mode = if clamp_bounce { BounceMode::Clamp } else { BounceMode::Mirror };
        let config = SimConfig::new().with_bounce_mode(mode);
        let world = build_scenario(SCENARIOS[0]).unwrap_or_default();
        let sim = Simulation::new(world, config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(StickDemo { sim, current: SCENARIOS[0].to_string() })
    }

    /// Replace the running world. Unknown names leave the current one running.
    pub fn load(&mut self, name: &str) -> bool {
        match build_scenario(name) {
            Some(world) => {
                self.sim.replace_world(world);
                self.current = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        let name = self.current.clone();
        self.load(&name);
    }

    pub fn scenario_names(&self) -> Vec<JsValue> {
        SCENARIOS.iter().map(|s| JsValue::from_str(s)).collect()
    }

    pub fn update(&mut self) {
        self.sim.step(&mut NoOpStepObserver);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.sim.handle_pointer(PointerEvent::Pressed(Vec2::new(x, y)));
        self.sim.dragging().is_some()
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.sim.handle_pointer(PointerEvent::Moved(Vec2::new(x, y)));
    }

    pub fn pointer_up(&mut self) {
        self.sim.handle_pointer(PointerEvent::Released);
    }

    /// Returns 1 if the particle under the pointer is now pinned, 0 if it was
    /// unpinned, -1 if there was nothing there.
    pub fn toggle_pin(&mut self, x: f32, y: f32) -> i32 {
        match self.sim.toggle_pin_at(Vec2::new(x, y)) {
            Some((_, true)) => 1,
            Some((_, false)) => 0,
            None => -1,
        }
    }

    /// Returns flat [x0, y0, x1, y1, ...] particle positions
    pub fn positions(&self) -> Vec<f32> {
        flatten(self.sim.world().particles().iter().map(|p| p.pos))
    }

    /// One byte per particle, 1 when pinned.
    pub fn pinned(&self) -> Vec<u8> {
        self.sim.world().particles().iter().map(|p| p.pinned as u8).collect()
    }

    /// Returns flat [ax, ay, bx, by, ...] per stick
    pub fn segments(&self) -> Vec<f32> {
        flatten(self.sim.world().segments().flat_map(|(a, b)| [a, b]))
    }

    pub fn width(&self) -> f32 {
        self.sim.config().width
    }

    pub fn height(&self) -> f32 {
        self.sim.config().height
    }
}
