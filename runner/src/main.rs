//! Headless locomotion harness.
//!
//! A minimal Bevy app that steps one character over procedural terrain on a
//! fixed tick: the pilot scripts the input, the orbit rig supplies the
//! camera basis and pointer rays, and the heightfield acts as both the
//! ground raycast target and the surface the capsule mover collides with.

mod mover;
mod pilot;
mod rig;
mod terrain;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use locomotion::{LocomotionConfig, LocomotionController, LocomotionInput};

use mover::{ground_clearance, TerrainMover};
use pilot::Pilot;
use rig::OrbitRig;
use terrain::Heightfield;

/// Simulation tick rate.
const FIXED_TIMESTEP_HZ: f64 = 60.0;

/// Seed for the scripted pilot.
const PILOT_SEED: u64 = 7;

/// Tunables file; missing or malformed falls back to defaults.
const CONFIG_PATH: &str = "runner/locomotion.ron";

/// How fast the rig drifts around the character, exercising basis changes.
const RIG_DRIFT_RAD_PER_S: f32 = 0.1;

fn tick_duration() -> Duration {
    Duration::from_secs_f64(1.0 / FIXED_TIMESTEP_HZ)
}

/// World position of the character capsule. The mover writes it back after
/// every swept move; nothing else mutates it.
#[derive(Component)]
struct CharacterBody {
    position: Vec3,
}

/// Load tunables from RON, falling back to defaults on any problem.
fn load_config() -> LocomotionConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(text) => match ron::from_str::<LocomotionConfig>(&text) {
            Ok(config) => {
                info!("loaded locomotion config from {CONFIG_PATH}: {config:?}");
                config
            }
            Err(err) => {
                warn!("failed to parse {CONFIG_PATH}: {err}; using defaults");
                LocomotionConfig::default()
            }
        },
        Err(err) => {
            warn!("could not read {CONFIG_PATH}: {err}; using defaults");
            LocomotionConfig::default()
        }
    }
}

fn setup(mut commands: Commands, terrain: Res<Heightfield>) {
    let controller = LocomotionController::new(load_config()).unwrap_or_else(|err| {
        warn!("invalid locomotion config: {err}; using defaults");
        LocomotionController::new(LocomotionConfig::default())
            .expect("default locomotion config is valid")
    });

    // Drop in slightly above the surface; the first ticks settle the capsule.
    let spawn = Vec3::new(
        0.0,
        terrain.height_at(0.0, 0.0) + ground_clearance() + 2.0,
        0.0,
    );

    commands.spawn((
        controller,
        LocomotionInput::default(),
        CharacterBody { position: spawn },
    ));
    commands.insert_resource(OrbitRig::new(spawn));

    info!("character spawned at {spawn}; ticking at {FIXED_TIMESTEP_HZ} Hz");
}

/// One fixed tick: latch the pilot's input, step the controller through the
/// terrain-backed collaborators, write the moved position back, follow with
/// the rig.
fn drive_characters(
    terrain: Res<Heightfield>,
    mut rig: ResMut<OrbitRig>,
    mut pilot: ResMut<Pilot>,
    mut characters: Query<(&mut LocomotionController, &mut LocomotionInput, &mut CharacterBody)>,
) {
    let dt = 1.0 / FIXED_TIMESTEP_HZ as f32;
    let command = pilot.tick(dt);

    for (mut controller, mut input, mut body) in characters.iter_mut() {
        // Written the same way an event dispatcher would: latest value wins.
        input.set_move(command.move_axis);
        input.set_look(command.look);
        input.set_pointer(command.pointer);

        // Edge event, delivered at the instant of the press.
        if command.jump {
            controller.jump();
        }

        let mut capsule = TerrainMover::new(&terrain, body.position);
        controller.update(&input, dt, &mut capsule, &*rig, &*terrain);
        body.position = capsule.position;

        rig.pivot = body.position;
        rig.yaw += RIG_DRIFT_RAD_PER_S * dt;
    }
}

/// Periodic state log so a harness run is observable without a window.
fn report_status(
    time: Res<Time>,
    mut last_report: Local<f32>,
    characters: Query<(&LocomotionController, &CharacterBody)>,
) {
    let now = time.elapsed_secs();
    if now - *last_report < 1.0 {
        return;
    }
    *last_report = now;

    for (controller, body) in characters.iter() {
        info!(
            "pos=({:.2}, {:.2}, {:.2}) grounded={} v_y={:.2} target=({:.1}, {:.1})",
            body.position.x,
            body.position.y,
            body.position.z,
            controller.grounded(),
            controller.vertical_velocity(),
            controller.facing_target().x,
            controller.facing_target().z,
        );
    }
}

fn main() {
    let mut app = App::new();

    // Headless: run the main loop at the fixed tick rate.
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(tick_duration())));
    app.add_plugins(bevy::log::LogPlugin::default());
    app.insert_resource(Time::<Fixed>::from_hz(FIXED_TIMESTEP_HZ));

    app.init_resource::<Heightfield>();
    app.insert_resource(Pilot::new(PILOT_SEED));

    app.add_systems(Startup, setup);
    app.add_systems(FixedUpdate, (drive_characters, report_status).chain());

    info!("starting locomotion harness");
    app.run();
}
