//! Venture headless runner
//!
//! Loads a level, drives the simulation with a scripted input sequence at
//! 60 Hz and prints the final state as JSON.
//!
//! Usage: `venture [level.json] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
mod runner {
    use std::fs;

    use serde::Serialize;

    use venture::consts::DEFAULT_DT;
    use venture::sim::{AnimState, GameEvent, InputSnapshot, Level, SimState, tick};
    use venture::{LevelError, Tuning};

    /// Ticks to simulate (10 seconds at 60 Hz)
    const TICKS: u32 = 600;

    const DEMO_LEVEL: &str = r#"{
        "spawn": { "x": -3.0, "y": 0.5 },
        "platforms": [
            { "position": { "x": 0.0, "y": -1.0 }, "size": { "x": 10.0, "y": 1.0 } },
            { "position": { "x": -1.0, "y": 0.0 }, "size": { "x": 1.0, "y": 0.2 } },
            { "position": { "x": 1.5, "y": 0.2 }, "size": { "x": 1.0, "y": 0.2 } },
            { "position": { "x": 4.75, "y": 0.5 }, "size": { "x": 0.5, "y": 2.0 } }
        ],
        "goals": [
            { "position": { "x": 4.0, "y": -0.3 }, "size": { "x": 0.4, "y": 0.4 } }
        ],
        "bounds": { "min": { "x": -2.0, "y": -2.0 }, "max": { "x": 2.0, "y": 2.0 } }
    }"#;

    /// Final state dump
    #[derive(Serialize)]
    struct Snapshot<'a> {
        ticks: u64,
        position: [f32; 2],
        velocity: [f32; 2],
        grounded: bool,
        animation: &'static str,
        frame: u32,
        facing_left: bool,
        camera: [f32; 2],
        goals_triggered: usize,
        events: &'a [GameEvent],
    }

    /// Hold right the whole run, tap jump for 10 ticks out of every 45
    fn scripted_input(t: u32) -> InputSnapshot {
        InputSnapshot {
            left: false,
            right: true,
            jump: t % 45 < 10,
        }
    }

    fn load(level_path: Option<&str>, tuning_path: Option<&str>) -> Result<SimState, LevelError> {
        let tuning = match tuning_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| LevelError::Io {
                    path: path.to_string(),
                    source,
                })?;
                Tuning::from_json(&json)?
            }
            None => Tuning::default(),
        };

        let level = match level_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| LevelError::Io {
                    path: path.to_string(),
                    source,
                })?;
                Level::from_json(&json)?
            }
            None => {
                log::info!("No level given, using the built-in demo level");
                Level::from_json(DEMO_LEVEL)?
            }
        };

        SimState::new(level, tuning)
    }

    pub fn run() -> std::process::ExitCode {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut state = match load(args.first().map(String::as_str), args.get(1).map(String::as_str))
        {
            Ok(state) => state,
            Err(e) => {
                log::error!("{}", e);
                eprintln!("error: {}", e);
                return std::process::ExitCode::FAILURE;
            }
        };

        let mut events: Vec<GameEvent> = Vec::new();
        let mut last_anim = AnimState::Idle;
        for t in 0..TICKS {
            let before = events.len();
            tick(&mut state, &scripted_input(t), DEFAULT_DT, &mut events);

            for event in &events[before..] {
                match event.sound_name() {
                    Some(sound) => log::info!("tick {}: {:?} (sound \"{}\")", t, event, sound),
                    None => log::info!("tick {}: {:?}", t, event),
                }
            }

            let anim = state.animation().state;
            if anim != last_anim {
                log::debug!("tick {}: animation {} -> {}", t, last_anim.as_str(), anim.as_str());
                last_anim = anim;
            }
        }

        let body = state.body();
        let animation = state.animation();
        let camera = state.camera();
        let snapshot = Snapshot {
            ticks: state.tick_count(),
            position: body.pos.to_array(),
            velocity: body.vel.to_array(),
            grounded: body.is_grounded(),
            animation: animation.state.as_str(),
            frame: animation.frame,
            facing_left: animation.facing_left,
            camera: camera.pos.to_array(),
            goals_triggered: state.goals().iter().filter(|g| g.triggered).count(),
            events: &events,
        };

        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => {
                println!("{}", json);
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to serialize snapshot: {}", e);
                std::process::ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Venture (headless) starting...");
    runner::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host embeds the library directly; there is no wasm binary entry point
}
