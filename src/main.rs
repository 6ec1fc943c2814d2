//! Platformer entry point
//!
//! Native builds run a headless demo: the fixed stage, driven by a scripted
//! input tape, with the final snapshot printed as JSON. The browser build
//! is driven from JS through `platformer::web`.

#[cfg(not(target_arch = "wasm32"))]
use platformer::{Key, Session, Tuning, consts::SIM_DT, sim::demo_level};

/// One segment of the scripted run: hold `keys` for `ticks` ticks
#[cfg(not(target_arch = "wasm32"))]
struct Segment {
    keys: &'static [Key],
    ticks: u32,
}

#[cfg(not(target_arch = "wasm32"))]
const TAPE: &[Segment] = &[
    // Drop onto the first platform
    Segment { keys: &[], ticks: 40 },
    // Run right and hop up to the gun
    Segment { keys: &[Key::Right], ticks: 20 },
    Segment { keys: &[Key::Right, Key::Jump], ticks: 12 },
    Segment { keys: &[Key::Right], ticks: 10 },
    // Shoot at whatever patrols past
    Segment { keys: &[Key::Fire], ticks: 120 },
    Segment { keys: &[Key::Right, Key::Jump, Key::Fire], ticks: 30 },
    Segment { keys: &[Key::Fire], ticks: 120 },
];

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
    {
        Ok(tuning) => tuning,
        Err(e) => {
            log::warn!("Could not load tuning from {path}: {e}; using defaults");
            Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Platformer (native, headless) starting...");

    let tuning = load_tuning();
    let mut session = match Session::new(demo_level(tuning)) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Demo level rejected: {e}");
            std::process::exit(1);
        }
    };
    session.start();

    for segment in TAPE {
        session.keys_mut().clear();
        for &key in segment.keys {
            session.keys_mut().press(key);
        }
        for _ in 0..segment.ticks {
            let world = session.frame(SIM_DT);
            for event in &world.events {
                log::debug!("tick {}: {:?}", world.tick, event);
            }
        }
    }
    session.stop();

    let world = session.world();
    log::info!(
        "Finished after {} ticks: score {}, weapon {}, {} enemies left",
        world.tick,
        world.score,
        world.equipped_weapon().map_or("none", |w| w.as_str()),
        world.enemies.len()
    );

    match world.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
