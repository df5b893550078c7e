use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResized};

use crate::configuration::config::ViewerConfig;
use crate::geometry::triangle::Triangle;
use crate::simulation::engine::{self, TapState, TickOutcome};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Bounds, Point};
use crate::visualization::color::pastel_rgb;

/// Component tagging each marker circle with its point index into
/// Scenario.points
#[derive(Component)]
struct PointIndex(pub usize);

/// Component tagging each wireframe with its triangle index into
/// Scenario.triangulation
#[derive(Component)]
struct TriangleIndex(pub usize);

/// Edge-triggered tap tracker; one point per press, held pointers are inert
#[derive(Resource, Default)]
struct TapTracker(TapState);

/// What this frame's tick did, written by `tick_system` and read by
/// `sync_drawables_system` later in the same frame
#[derive(Resource)]
struct LastTick(TickOutcome);

/// Viewer options carried over from the scene file
#[derive(Resource, Default)]
struct ViewerSettings(ViewerConfig);

/// Z offsets keep the draw order deterministic: markers in front,
/// triangulation lines behind them
const POINT_Z: f32 = 1.0;
const LINE_Z: f32 = 0.5;

/// Convenience entrypoint: hand over a built scenario and block in the
/// Bevy event loop until the window closes
pub fn run_viewer(scenario: Scenario, viewer: ViewerConfig) {
    println!(
        "run_viewer: starting Bevy 2D viewer with {} points",
        scenario.points.len()
    );

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .insert_resource(ViewerSettings(viewer))
        .insert_resource(TapTracker(TapState::new()))
        .insert_resource(LastTick(TickOutcome::Idle))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_system)
        // Within-frame order is load-bearing: input, then resize flagging,
        // then physics/triangulation, then drawable sync
        .add_systems(
            Update,
            (tap_system, resize_system, tick_system, sync_drawables_system).chain(),
        )
        .run();
}

/// Startup system: 2D camera. World coordinates match simulation
/// coordinates (origin center, y up), so no extra scaling anywhere
fn setup_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Turn the raw pointer level into edge-triggered placements
///
/// Mouse and touch both report a down *level* every frame; `TapTracker`
/// converts that to a single edge per press so a held pointer spawns
/// exactly one point
fn tap_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut tap: ResMut<TapTracker>,
    settings: Res<ViewerSettings>,
    mut scenario: ResMut<Scenario>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let touch_pos = touches.first_pressed_position();
    let down = mouse.pressed(MouseButton::Left) || touch_pos.is_some();

    if !down {
        tap.0.release();
        return;
    }
    if !tap.0.press() {
        // held interaction, already acted on
        return;
    }

    // Screen coordinates: origin top-left, y down, logical pixels
    let Some(pos) = touch_pos.or_else(|| window.cursor_position()) else {
        return;
    };

    engine::place_point(
        &mut scenario,
        pos.x as f64,
        pos.y as f64,
        window.width() as f64,
        window.height() as f64,
    );

    // Fire-and-forget tap feedback; playback is not awaited
    if let Some(path) = &settings.0.tap_sound {
        commands.spawn(AudioBundle {
            source: asset_server.load(path.clone()),
            settings: PlaybackSettings::DESPAWN,
        });
    }
}

/// A resize invalidates the boundary geometry; force a full recompute on
/// the next tick
fn resize_system(mut events: EventReader<WindowResized>, mut scenario: ResMut<Scenario>) {
    if events.read().last().is_some() {
        scenario.triangulation.mark_stale();
    }
}

/// Per-frame physics + trigger policy; records the outcome for the sync
/// system
fn tick_system(
    mut scenario: ResMut<Scenario>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut last: ResMut<LastTick>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let bounds = Bounds::from_screen(window.width() as f64, window.height() as f64);
    last.0 = engine::tick(&mut scenario, bounds);
}

/// Mirror the simulation state into drawables
///
/// `Recomputed` tears every drawable down (releasing mesh and material
/// assets) and rebuilds from the fresh triangle list; `Refreshed` only
/// pushes updated coordinates into existing meshes and transforms. Membership
/// never changes on the refresh path
fn sync_drawables_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    scenario: Res<Scenario>,
    last: Res<LastTick>,
    mut marker_moves: Query<(&PointIndex, &mut Transform), Without<TriangleIndex>>,
    wireframes: Query<(Entity, &TriangleIndex, &Mesh2dHandle, &Handle<ColorMaterial>)>,
    markers: Query<(Entity, &Mesh2dHandle, &Handle<ColorMaterial>), With<PointIndex>>,
) {
    match last.0 {
        TickOutcome::Idle => {}

        TickOutcome::Refreshed => {
            // Move the markers
            for (PointIndex(i), mut transform) in &mut marker_moves {
                if let Some(p) = scenario.points.points.get(*i) {
                    transform.translation.x = p.x.x as f32;
                    transform.translation.y = p.x.y as f32;
                }
            }
            // Re-push wireframe vertices in place; no new drawables
            for (_entity, TriangleIndex(ti), mesh2d, _mat) in &wireframes {
                if let Some(t) = scenario.triangulation.triangles().get(*ti) {
                    if let Some(mesh) = meshes.get_mut(&mesh2d.0) {
                        mesh.insert_attribute(
                            Mesh::ATTRIBUTE_POSITION,
                            edge_positions(t, &scenario.points.points),
                        );
                    }
                }
            }
        }

        TickOutcome::Recomputed => {
            // Tear down every drawable. Asset removal tolerates handles
            // that were already released
            for (entity, _ti, mesh2d, mat) in &wireframes {
                meshes.remove(&mesh2d.0);
                materials.remove(mat);
                commands.entity(entity).despawn();
            }
            for (entity, mesh2d, mat) in &markers {
                meshes.remove(&mesh2d.0);
                materials.remove(mat);
                commands.entity(entity).despawn();
            }

            // One marker circle per live point
            let radius = scenario.parameters.point_radius as f32;
            for (i, p) in scenario.points.points.iter().enumerate() {
                commands.spawn((
                    MaterialMesh2dBundle {
                        mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                        material: materials.add(ColorMaterial::from(Color::WHITE)),
                        transform: Transform::from_xyz(p.x.x as f32, p.x.y as f32, POINT_Z),
                        ..Default::default()
                    },
                    PointIndex(i),
                ));
            }

            // One 3-edge wireframe per triangle, colored by its seed
            for (ti, t) in scenario.triangulation.triangles().iter().enumerate() {
                let color = packed_to_color(pastel_rgb(t.color_seed(&scenario.points.points)));

                let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
                mesh.insert_attribute(
                    Mesh::ATTRIBUTE_POSITION,
                    edge_positions(t, &scenario.points.points),
                );

                commands.spawn((
                    MaterialMesh2dBundle {
                        mesh: Mesh2dHandle(meshes.add(mesh)),
                        material: materials.add(ColorMaterial::from(color)),
                        ..Default::default()
                    },
                    TriangleIndex(ti),
                ));
            }
        }
    }
}

/// The triangle's 3 edges as independent line segments: 6 vertices
/// (a-b, b-c, c-a) at the fixed wireframe depth
fn edge_positions(t: &Triangle, points: &[Point]) -> Vec<[f32; 3]> {
    let [a, b, c] = t.positions(points);
    vec![
        [a.x as f32, a.y as f32, LINE_Z],
        [b.x as f32, b.y as f32, LINE_Z],
        [b.x as f32, b.y as f32, LINE_Z],
        [c.x as f32, c.y as f32, LINE_Z],
        [c.x as f32, c.y as f32, LINE_Z],
        [a.x as f32, a.y as f32, LINE_Z],
    ]
}

/// Unpack `0xRRGGBB` into a Bevy color
fn packed_to_color(rgb: u32) -> Color {
    Color::srgb_u8(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    )
}
