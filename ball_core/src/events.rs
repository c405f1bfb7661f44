use glam::Vec2;

/// Tag carried by the other object in a collision or trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Paddle,
    Goal1,
    Goal2,
    Other(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Paddle => "Paddle",
            Tag::Goal1 => "Goal1",
            Tag::Goal2 => "Goal2",
            Tag::Other(name) => name,
        }
    }
}

impl From<&str> for Tag {
    /// Exact, case-sensitive match on the tag names.
    fn from(name: &str) -> Self {
        match name {
            "Paddle" => Tag::Paddle,
            "Goal1" => Tag::Goal1,
            "Goal2" => Tag::Goal2,
            other => Tag::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical contact between the ball and a solid body.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Unit normal at the contact point, pointing toward the ball.
    pub normal: Vec2,
    pub tag: Tag,
    /// World position of the other body.
    pub other_position: Vec2,
    /// Height of the other body's bounds.
    pub other_height: f32,
}

impl Contact {
    pub fn new(normal: Vec2, tag: Tag, other_position: Vec2, other_height: f32) -> Self {
        Self {
            normal,
            tag,
            other_position,
            other_height,
        }
    }
}

/// Events delivered by the physics loop
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionEvent {
    Contact(Contact),
    Trigger { tag: Tag },
}

/// Goal side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Things that happened to the ball since the last `update`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallEvents {
    pub launched: bool,
    pub reset: bool,
    pub paddle_hits: u32,
    pub bounces: u32,
    pub scored: Option<Side>,
}

impl BallEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
