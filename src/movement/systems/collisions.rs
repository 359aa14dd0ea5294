//! Movement domain: ground and wall probing against the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementTuning, Player, SurfaceContacts};

pub(crate) fn probe_surfaces(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut SurfaceContacts), With<Player>>,
) {
    // Walls double as ground when stood on, and ground edges count as walls.
    let surface_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

    for (transform, collider, mut contacts) in &mut query {
        let (half_width, half_height) = match collider.shape_scaled().as_cuboid() {
            Some(c) => (c.half_extents.x, c.half_extents.y),
            None => (12.0, 24.0),
        };

        let origin = transform.translation.truncate();
        let feet = origin - Vec2::new(0.0, half_height);

        let ground_hit = spatial_query.cast_ray(
            feet,
            Dir2::NEG_Y,
            tuning.ground_probe_distance,
            true,
            &surface_filter,
        );

        let side_distance = half_width + tuning.wall_probe_distance;
        let left_hit =
            spatial_query.cast_ray(origin, Dir2::NEG_X, side_distance, true, &surface_filter);
        let right_hit =
            spatial_query.cast_ray(origin, Dir2::X, side_distance, true, &surface_filter);

        let next = SurfaceContacts {
            grounded: ground_hit.is_some(),
            wall_left: left_hit.is_some(),
            wall_right: right_hit.is_some(),
        };

        if next.grounded != contacts.grounded {
            debug!("Ground contact changed: grounded={}", next.grounded);
        }
        *contacts = next;
    }
}
