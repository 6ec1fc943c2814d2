//! Browser bindings
//!
//! JS owns the canvas, the key listeners, and `requestAnimationFrame`. It
//! forwards key names and frame deltas here and draws from the JSON
//! snapshot.

use wasm_bindgen::prelude::*;

use crate::session::Session;
use crate::sim::{LevelParams, WorldBounds, WorldState, demo_level, generate_level};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Platformer starting...");
}

/// Game instance held by JS
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
}

impl WebGame {
    fn from_world(world: WorldState) -> Result<WebGame, JsValue> {
        let session = Session::new(world).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized at tick {}", session.world().tick);
        Ok(WebGame { session })
    }
}

#[wasm_bindgen]
impl WebGame {
    /// Procedurally generated level filling a `width` x `height` stage
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, width: f32, height: f32) -> Result<WebGame, JsValue> {
        let world = generate_level(
            seed,
            WorldBounds::new(width, height),
            Tuning::default(),
            &LevelParams::default(),
        );
        Self::from_world(world)
    }

    /// The fixed 800x400 stage
    pub fn demo() -> Result<WebGame, JsValue> {
        Self::from_world(demo_level(Tuning::default()))
    }

    /// A level supplied as a JSON `WorldState`
    pub fn from_json(json: &str) -> Result<WebGame, JsValue> {
        let world: WorldState =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::from_world(world)
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    /// Returns false for keys the game ignores so JS can let them through
    pub fn key_down(&mut self, key: &str) -> bool {
        self.session.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.session.key_up(key)
    }

    /// Advance by a frame delta in seconds; returns the tick count
    pub fn frame(&mut self, dt: f32) -> u64 {
        self.session.frame(dt).tick
    }

    pub fn score(&self) -> u64 {
        self.session.world().score
    }

    /// Latest snapshot for the renderer
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.session
            .world()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
