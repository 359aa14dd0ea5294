//! Movement domain: the practice level with floors, walls and checkpoints.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};
use crate::respawn::Checkpoint;

fn spawn_block(
    commands: &mut Commands,
    size: Vec2,
    position: Vec2,
    color: Color,
    layers: CollisionLayers,
    is_wall: bool,
) {
    let mut entity = commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
    if is_wall {
        entity.insert(Wall);
    } else {
        entity.insert(Ground);
    }
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let checkpoint_color = Color::srgb(0.9, 0.8, 0.2);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Ground, split by a pit that exercises fall respawn
    for (width, x) in [(500.0, -150.0), (300.0, 450.0)] {
        spawn_block(
            &mut commands,
            Vec2::new(width, 40.0),
            Vec2::new(x, -200.0),
            ground_color,
            ground_layers,
            false,
        );
    }

    // Outer walls
    for x in [-420.0, 620.0] {
        spawn_block(
            &mut commands,
            Vec2::new(40.0, 700.0),
            Vec2::new(x, 130.0),
            wall_color,
            wall_layers,
            true,
        );
    }

    // Platforms at increasing height
    for (size, position) in [
        (Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0)),
        (Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0)),
        (Vec2::new(120.0, 20.0), Vec2::new(0.0, 180.0)),
    ] {
        spawn_block(
            &mut commands,
            size,
            position,
            platform_color,
            ground_layers,
            false,
        );
    }

    // Twin pillars for wall jumping practice
    for x in [-100.0, 20.0] {
        spawn_block(
            &mut commands,
            Vec2::new(30.0, 260.0),
            Vec2::new(x, -50.0),
            wall_color,
            wall_layers,
            true,
        );
    }

    // Checkpoints past the pit and on the top platform
    for position in [Vec2::new(450.0, -160.0), Vec2::new(0.0, 210.0)] {
        commands.spawn((
            Checkpoint::default(),
            Sprite {
                color: checkpoint_color,
                custom_size: Some(Vec2::new(12.0, 24.0)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, -1.0),
        ));
    }
}
