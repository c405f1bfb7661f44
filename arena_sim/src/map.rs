use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

/// How far a circle has sunk into a box, and which way is out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub normal: Vec2,
    pub depth: f32,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = center.clamp(self.min, self.max);
        (center - closest).length_squared() <= radius * radius
    }

    /// Contact normal (pointing out of the box, toward the circle) and depth.
    pub fn penetration(&self, center: Vec2, radius: f32) -> Option<Penetration> {
        let closest = center.clamp(self.min, self.max);
        let delta = center - closest;
        let dist_sq = delta.length_squared();
        if dist_sq > radius * radius {
            return None;
        }
        if dist_sq > f32::EPSILON {
            let dist = dist_sq.sqrt();
            return Some(Penetration {
                normal: delta / dist,
                depth: radius - dist,
            });
        }

        // Center is inside the box: leave through the nearest face
        let faces = [
            (center.x - self.min.x, Vec2::NEG_X),
            (self.max.x - center.x, Vec2::X),
            (center.y - self.min.y, Vec2::NEG_Y),
            (self.max.y - center.y, Vec2::Y),
        ];
        let (dist, normal) = faces
            .into_iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))?;
        Some(Penetration {
            normal,
            depth: dist + radius,
        })
    }
}
