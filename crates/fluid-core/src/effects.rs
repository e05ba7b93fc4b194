//! Procedural force emitters.
//!
//! Each generator is a pure reader of its configuration record: given the
//! canvas backing size (and, for spin, the frame time) it computes the
//! splat commands for one frame. The obstacle is scenery rather than a
//! force injector and is sequenced by the frame driver instead.

use crate::constants::{
    BASE_RADIUS_SCALE, DEFAULT_BLUE, DEFAULT_RED, EMITTER_EDGE_OFFSET, EMITTER_RADIUS,
    EMITTER_STRENGTH, OBSTACLE_COLOR, OBSTACLE_SIZE, SPLAT_FORCE,
};
use glam::Vec2;

/// One localized force/dye injection, in the units the renderer's `splat`
/// operation expects: device pixels, color components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Splat {
    pub radius: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: [f32; 3],
}

/// One continuous emitter. Offsets are fractions of the half-extent
/// measured from the canvas center, so -1 and +1 reach the edges.
#[derive(Clone, Debug)]
pub struct Emitter {
    /// GUI color on the 0..255 scale; normalized when building splats.
    pub color_rgb: [f32; 3],
    /// Scale applied to the frame's base radius.
    pub radius: f32,
    pub strength: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

impl Emitter {
    fn anchor(&self, size: Vec2) -> Vec2 {
        offset_center(size, self.x_offset, self.y_offset)
    }
}

/// Two opposed emitters near the side edges, flowing toward each other.
#[derive(Clone, Debug)]
pub struct SpellPairConfig {
    pub left: Emitter,
    pub right: Emitter,
}

impl Default for SpellPairConfig {
    fn default() -> Self {
        Self {
            left: Emitter {
                color_rgb: DEFAULT_RED,
                radius: EMITTER_RADIUS,
                strength: EMITTER_STRENGTH,
                x_offset: -EMITTER_EDGE_OFFSET,
                y_offset: 0.0,
            },
            right: Emitter {
                color_rgb: DEFAULT_BLUE,
                radius: EMITTER_RADIUS,
                strength: EMITTER_STRENGTH,
                x_offset: EMITTER_EDGE_OFFSET,
                y_offset: 0.0,
            },
        }
    }
}

impl SpellPairConfig {
    /// Exactly two splats: the left emitter pushes rightward, the right
    /// one leftward.
    pub fn splats(&self, size: Vec2) -> [Splat; 2] {
        let radius = base_radius(size);

        [
            Splat {
                radius: radius * self.left.radius,
                position: self.left.anchor(size),
                velocity: Vec2::new(SPLAT_FORCE * self.left.strength, 0.0),
                color: normalize_color(self.left.color_rgb),
            },
            Splat {
                radius: radius * self.right.radius,
                position: self.right.anchor(size),
                velocity: Vec2::new(-SPLAT_FORCE * self.right.strength, 0.0),
                color: normalize_color(self.right.color_rgb),
            },
        ]
    }
}

/// A single emitter whose force direction revolves over time, driving a
/// persistent vortex around the anchor point.
#[derive(Clone, Debug)]
pub struct SpinConfig {
    pub emitter: Emitter,
    /// Angular velocity in radians per second.
    pub rate: f32,
    /// Angular offset in radians.
    pub phase: f32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            emitter: Emitter {
                color_rgb: DEFAULT_RED,
                radius: EMITTER_RADIUS,
                strength: EMITTER_STRENGTH,
                x_offset: 0.0,
                y_offset: 0.0,
            },
            rate: 1.0,
            phase: 0.0,
        }
    }
}

impl SpinConfig {
    /// Exactly one splat at the anchored center, its velocity rotated to
    /// `rate * t + phase` radians.
    pub fn splat(&self, size: Vec2, time_sec: f32) -> Splat {
        let angle = self.rate * time_sec + self.phase;

        Splat {
            radius: base_radius(size) * self.emitter.radius,
            position: self.emitter.anchor(size),
            velocity: Vec2::new(angle.cos(), angle.sin()) * SPLAT_FORCE * self.emitter.strength,
            color: normalize_color(self.emitter.color_rgb),
        }
    }
}

/// Active procedural effect. At most one variant emits per frame; the
/// obstacle composes independently of this selection.
#[derive(Clone, Debug, Default)]
pub enum Effect {
    #[default]
    None,
    SpellPair(SpellPairConfig),
    Spin(SpinConfig),
}

/// Static boundary obstacle. Placement is live every frame while enabled;
/// the frame driver turns a disable into a single clear directive.
#[derive(Clone, Debug)]
pub struct ObstacleConfig {
    pub enabled: bool,
    pub x_offset: f32,
    pub y_offset: f32,
    /// Extent in device pixels.
    pub size: f32,
    /// GUI color on the 0..255 scale.
    pub color_rgb: [f32; 3],
    pub circle: bool,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            x_offset: 0.0,
            y_offset: 0.0,
            size: OBSTACLE_SIZE,
            color_rgb: OBSTACLE_COLOR,
            circle: true,
        }
    }
}

impl ObstacleConfig {
    pub fn position(&self, size: Vec2) -> Vec2 {
        offset_center(size, self.x_offset, self.y_offset)
    }
}

/// Resolution-independent falloff scale shared by every splat in a frame.
#[inline]
pub fn base_radius(size: Vec2) -> f32 {
    size.x.min(size.y) * BASE_RADIUS_SCALE
}

/// GUI 0..255 color to the [0, 1] floats the renderer expects.
#[inline]
pub fn normalize_color(rgb: [f32; 3]) -> [f32; 3] {
    [rgb[0] / 255.0, rgb[1] / 255.0, rgb[2] / 255.0]
}

#[inline]
fn offset_center(size: Vec2, x_offset: f32, y_offset: f32) -> Vec2 {
    let half = size * 0.5;
    half + Vec2::new(x_offset, y_offset) * half
}
