use ball_core::{Ball, CollisionEvent, Contact, Tag};
use hecs::{Entity, World};

use crate::components::{Collider, Sensor};
use crate::map::Aabb;

/// Detect ball contacts against solids and sensor entries.
///
/// Solids push the ball out of overlap and report a contact only while the
/// ball is moving into the surface. Sensors report once on entry; `overlapping`
/// carries which sensors the ball was already inside between calls.
pub fn detect_collisions(
    world: &World,
    ball: &mut Ball,
    radius: f32,
    overlapping: &mut Vec<Entity>,
) -> Vec<CollisionEvent> {
    // Collect collider data first, sorted for a stable event order
    let mut bodies: Vec<(Entity, Aabb, Tag, bool)> = world
        .query::<(&Collider, &Tag, Option<&Sensor>)>()
        .iter()
        .map(|(e, (collider, tag, sensor))| (e, collider.aabb, tag.clone(), sensor.is_some()))
        .collect();
    bodies.sort_by_key(|(e, ..)| e.id());

    let mut events = Vec::new();
    for (entity, aabb, tag, sensor) in bodies {
        if sensor {
            let inside = aabb.intersects_circle(ball.pos, radius);
            let was_inside = overlapping.contains(&entity);
            if inside && !was_inside {
                overlapping.push(entity);
                events.push(CollisionEvent::Trigger { tag });
            } else if !inside && was_inside {
                overlapping.retain(|e| *e != entity);
            }
            continue;
        }

        let Some(pen) = aabb.penetration(ball.pos, radius) else {
            continue;
        };
        ball.pos += pen.normal * pen.depth;
        if ball.vel.dot(pen.normal) < 0.0 {
            events.push(CollisionEvent::Contact(Contact::new(
                pen.normal,
                tag,
                aabb.center(),
                aabb.size().y,
            )));
        }
    }
    events
}
