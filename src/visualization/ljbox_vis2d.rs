use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Current playback frame into the recorded histories
#[derive(Resource)]
struct Playback(pub usize);

const SCALE: f32 = 50.0;
const MARKER_RADIUS: f32 = 0.1; // marker size in simulation units

/// Open the Bevy 2D viewer and replay the completed trajectories on loop
/// Expects the scenario to have been run by the driver already, so every
/// particle's `x_hist` holds the full trajectory
pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D playback with {} particles", scenario.system.particles.len());

    let title = scenario.title.clone();

    App::new()
        .insert_resource(scenario)
        .insert_resource(Playback(0))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_particles_system)
        .add_systems(Update, (advance_playback_system, sync_transforms_system, draw_overlay_system))
        .run();
}

fn setup_particles_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, particle) in scenario.system.particles.iter().enumerate() {
        let start = particle.x_hist[0];
        let x = start.x as f32 * SCALE;
        let y = start.y as f32 * SCALE;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(MARKER_RADIUS * SCALE))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

/// Advance one recorded frame per render frame, wrapping at the end so the
/// playback repeats
fn advance_playback_system(scenario: Res<Scenario>, mut playback: ResMut<Playback>) {
    let frames = scenario
        .system
        .particles
        .first()
        .map(|p| p.x_hist.len())
        .unwrap_or(0);
    if frames > 0 {
        playback.0 = (playback.0 + 1) % frames;
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, playback: Res<Playback>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.system.particles.get(*i) {
            if let Some(x) = p.x_hist.get(playback.0) {
                transform.translation.x = (x.x as f32) * SCALE;
                transform.translation.y = (x.y as f32) * SCALE;
            }
        }
    }
}

/// Draw the box walls and a short trajectory trail behind each particle
fn draw_overlay_system(scenario: Res<Scenario>, playback: Res<Playback>, mut gizmos: Gizmos) {
    let side = (scenario.parameters.boundary as f32) * 2.0 * SCALE;
    gizmos.rect_2d(Vec2::ZERO, 0.0, Vec2::splat(side), Color::GRAY);

    let frame = playback.0;
    let trail = scenario.engine.trail_length;
    for p in &scenario.system.particles {
        let start = frame.saturating_sub(trail);
        for w in p.x_hist[start..=frame.min(p.x_hist.len() - 1)].windows(2) {
            let a = Vec2::new(w[0].x as f32, w[0].y as f32) * SCALE;
            let b = Vec2::new(w[1].x as f32, w[1].y as f32) * SCALE;
            gizmos.line_2d(a, b, Color::GRAY.with_a(0.3));
        }
    }
}
