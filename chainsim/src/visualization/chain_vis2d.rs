use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::{Circle, Rectangle};
use bevy::window::WindowResolution;

use crate::simulation::params::Viewport;
use crate::simulation::render::{DrawCommand, DrawList, Rgba};
use crate::simulation::scenario::Scenario;
use crate::simulation::vector::NVec2;

/// Tags every mesh entity owned by a pool
#[derive(Component)]
struct PooledShape;

/// Commands recorded by `Chain::render` for the current frame
#[derive(Resource, Default)]
struct Frame(DrawList);

type ShapeQuery<'w, 's> =
    Query<'w, 's, (&'static mut Transform, &'static mut Visibility), With<PooledShape>>;

/// Entities reused from frame to frame, all sharing one unit mesh
struct Pool {
    mesh: Handle<Mesh>,
    entries: Vec<(Entity, Handle<ColorMaterial>)>,
}

#[derive(Resource)]
struct ShapePools {
    disks: Pool,    // unit circle, scaled by radius
    segments: Pool, // unit square, stretched along the segment
}

/// z distance between two consecutive draws, later draws end up on top
const DEPTH_STEP: f32 = 0.01;

/// Thickness of link segments in pixels
const LINE_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Disk,
    Segment,
}

/// One draw command placed in world space
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInstance {
    pub kind: ShapeKind,
    pub transform: Transform,
    pub color: Color,
}

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} circles (seed {})",
        scenario.chain.link_count(),
        scenario.seed
    );

    let viewport = scenario.viewport.clone();

    App::new()
        .insert_resource(ClearColor(to_color(viewport.background)))
        .insert_resource(Time::<Fixed>::from_hz(viewport.target_fps))
        .insert_resource(scenario)
        .init_resource::<Frame>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: viewport.title.clone(),
                resolution: WindowResolution::new(viewport.width as f32, viewport.height as f32),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(FixedUpdate, rotate_chain_system)
        .add_systems(Update, (render_chain_system, present_shapes_system).chain())
        .run();
}

fn setup_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>, scenario: Res<Scenario>) {
    // LogPlugin is up by now
    info!("{}", scenario.summary());

    // 2D camera
    commands.spawn(Camera2dBundle::default());

    commands.insert_resource(ShapePools {
        disks: Pool::new(meshes.add(Circle::new(1.0))),
        segments: Pool::new(meshes.add(Rectangle::new(1.0, 1.0))),
    });
}

fn rotate_chain_system(mut scenario: ResMut<Scenario>) {
    scenario.step();

    if scenario.animation.dump {
        info!("\n{}", scenario.chain);
    } else {
        debug!("chain rotated by {} degrees", scenario.animation.angle_step);
    }
}

fn render_chain_system(scenario: Res<Scenario>, mut frame: ResMut<Frame>) {
    let Frame(list) = &mut *frame;
    list.clear();
    scenario.chain.render(list, &scenario.style);
}

fn present_shapes_system(
    mut commands: Commands,
    frame: Res<Frame>,
    scenario: Res<Scenario>,
    mut pools: ResMut<ShapePools>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut shapes: ShapeQuery,
) {
    let ShapePools { disks, segments } = &mut *pools;
    let mut used_disks = 0;
    let mut used_segments = 0;

    for instance in layout_shapes(&frame.0, &scenario.viewport) {
        let (pool, used) = match instance.kind {
            ShapeKind::Disk => (&mut *disks, &mut used_disks),
            ShapeKind::Segment => (&mut *segments, &mut used_segments),
        };
        pool.place(*used, instance, &mut commands, &mut materials, &mut shapes);
        *used += 1;
    }

    // Chain length is fixed, but keep the pools honest if the command count shrinks
    disks.hide_from(used_disks, &mut shapes);
    segments.hide_from(used_segments, &mut shapes);
}

impl Pool {
    fn new(mesh: Handle<Mesh>) -> Self {
        Self { mesh, entries: Vec::new() }
    }

    /// Move entity `slot` onto `instance`, spawning it on first use
    fn place(
        &mut self,
        slot: usize,
        instance: ShapeInstance,
        commands: &mut Commands,
        materials: &mut Assets<ColorMaterial>,
        shapes: &mut ShapeQuery,
    ) {
        if let Some((entity, material)) = self.entries.get(slot) {
            if let Ok((mut transform, mut visibility)) = shapes.get_mut(*entity) {
                *transform = instance.transform;
                *visibility = Visibility::Visible;
            }
            recolor(materials, material, instance.color);
            return;
        }

        let material = materials.add(ColorMaterial::from(instance.color));
        let entity = commands
            .spawn((
                MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(self.mesh.clone()),
                    material: material.clone(),
                    transform: instance.transform,
                    ..Default::default()
                },
                PooledShape,
            ))
            .id();
        self.entries.push((entity, material));
    }

    fn hide_from(&self, used: usize, shapes: &mut ShapeQuery) {
        for (entity, _) in self.entries.iter().skip(used) {
            if let Ok((_, mut visibility)) = shapes.get_mut(*entity) {
                *visibility = Visibility::Hidden;
            }
        }
    }
}

/// Set a material's color, touching the asset only when it actually changes.
/// `get_mut` flags the asset as modified and triggers a re-upload, so the
/// comparison goes through `get`. Returns whether the material was written.
pub fn recolor(materials: &mut Assets<ColorMaterial>, material: &Handle<ColorMaterial>, color: Color) -> bool {
    let stale = materials.get(material).is_some_and(|m| m.color != color);
    if !stale {
        return false;
    }
    match materials.get_mut(material) {
        Some(m) => {
            m.color = color;
            true
        }
        None => false,
    }
}

/// Place every command of `list` in world space, keeping command order as depth
pub fn layout_shapes(list: &DrawList, viewport: &Viewport) -> Vec<ShapeInstance> {
    list.commands()
        .iter()
        .enumerate()
        .map(|(order, cmd)| {
            let z = order as f32 * DEPTH_STEP;
            match cmd {
                DrawCommand::Circle { center, radius, color } => ShapeInstance {
                    kind: ShapeKind::Disk,
                    transform: disk_transform(center, *radius, z, viewport),
                    color: to_color(*color),
                },
                DrawCommand::Line { from, to, color } => ShapeInstance {
                    kind: ShapeKind::Segment,
                    transform: segment_transform(from, to, z, viewport),
                    color: to_color(*color),
                },
            }
        })
        .collect()
}

/// Screen pixels (origin top-left, y down) -> world units (origin center, y up)
fn to_world(p: &NVec2, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        p.x as f32 - viewport.width as f32 / 2.0,
        viewport.height as f32 / 2.0 - p.y as f32,
    )
}

fn disk_transform(center: &NVec2, radius: f64, z: f32, viewport: &Viewport) -> Transform {
    let p = to_world(center, viewport);
    Transform::from_xyz(p.x, p.y, z).with_scale(Vec3::new(radius as f32, radius as f32, 1.0))
}

// Unit square centered on the midpoint, x stretched to the segment length
fn segment_transform(from: &NVec2, to: &NVec2, z: f32, viewport: &Viewport) -> Transform {
    let a = to_world(from, viewport);
    let b = to_world(to, viewport);
    let d = b - a;
    let mid = (a + b) / 2.0;

    Transform::from_xyz(mid.x, mid.y, z)
        .with_rotation(Quat::from_rotation_z(d.y.atan2(d.x)))
        .with_scale(Vec3::new(d.length(), LINE_WIDTH, 1.0))
}

fn to_color(c: Rgba) -> Color {
    Color::srgba_u8(c.r, c.g, c.b, c.a)
}
