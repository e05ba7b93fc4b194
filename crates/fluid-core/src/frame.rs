//! Per-frame coordination between the pointer, the procedural effects,
//! and the external renderer.

use crate::effects::{base_radius, normalize_color, Effect, ObstacleConfig};
use crate::params::{Mode, SimParams};
use crate::pointer::Pointer;
use glam::Vec2;

/// The external renderer's fixed operation set. The web crate implements
/// this over the wasm module boundary; tests implement it with recorders.
pub trait FluidSurface {
    /// Inject a localized force/dye impulse.
    fn splat(
        &mut self,
        radius: f32,
        position: Vec2,
        velocity: Vec2,
        color: [f32; 3],
    ) -> anyhow::Result<()>;

    /// Place a static boundary obstacle, or clear it when `size` is `None`.
    fn set_obstacle(
        &mut self,
        size: Option<f32>,
        position: Vec2,
        color: [f32; 3],
        circle: bool,
    ) -> anyhow::Result<()>;

    /// Advance (or, while paused, redraw) one simulation step.
    #[allow(clippy::too_many_arguments)]
    fn update(
        &mut self,
        paused: bool,
        time_sec: f32,
        mode: Mode,
        iterations: u32,
        viscosity: f32,
        dissipation: f32,
        curl: f32,
        pressure: f32,
    ) -> anyhow::Result<()>;
}

/// Owns the interaction state and drives one renderer step per animation
/// tick. Event handlers and the control surface mutate the public records
/// between ticks; `advance` reads them once per frame.
pub struct FrameDriver {
    pub pointer: Pointer,
    pub params: SimParams,
    pub effect: Effect,
    pub obstacle: ObstacleConfig,
    obstacle_present: bool,
}

impl FrameDriver {
    pub fn new(params: SimParams) -> Self {
        Self {
            pointer: Pointer::new(),
            params,
            effect: Effect::default(),
            obstacle: ObstacleConfig::default(),
            obstacle_present: false,
        }
    }

    /// Run one frame body in the required order: obstacle directive,
    /// pointer splat, procedural splats, solver update.
    ///
    /// The pointer's moved flag is consumed even when a step fails, so a
    /// bad frame cannot replay a stale velocity on the next tick.
    pub fn advance<S: FluidSurface>(
        &mut self,
        surface: &mut S,
        size: Vec2,
        time_sec: f32,
    ) -> anyhow::Result<()> {
        let result = self.emit(surface, size, time_sec);
        self.pointer.consume_move();
        result
    }

    fn emit<S: FluidSurface>(
        &mut self,
        surface: &mut S,
        size: Vec2,
        time_sec: f32,
    ) -> anyhow::Result<()> {
        // Scenery first: a placed or cleared obstacle must be visible to
        // the same update step as this frame's splats. Stays live while
        // paused.
        if self.obstacle.enabled {
            surface.set_obstacle(
                Some(self.obstacle.size),
                self.obstacle.position(size),
                normalize_color(self.obstacle.color_rgb),
                self.obstacle.circle,
            )?;
            self.obstacle_present = true;
        } else if self.obstacle_present {
            log::debug!("clearing obstacle");
            surface.set_obstacle(
                None,
                self.obstacle.position(size),
                normalize_color(self.obstacle.color_rgb),
                self.obstacle.circle,
            )?;
            self.obstacle_present = false;
        }

        let radius = base_radius(size);

        // Pointer splats stay live while paused; painting into a frozen
        // field takes effect the instant it unpauses.
        if self.pointer.is_moved() {
            surface.splat(
                radius * self.params.pointer_radius,
                self.pointer.position(),
                self.pointer.velocity(),
                normalize_color(self.params.color),
            )?;
        }

        if !self.params.paused {
            match &self.effect {
                Effect::None => {}
                Effect::SpellPair(spell) => {
                    for splat in spell.splats(size) {
                        surface.splat(splat.radius, splat.position, splat.velocity, splat.color)?;
                    }
                }
                Effect::Spin(spin) => {
                    let splat = spin.splat(size, time_sec);
                    surface.splat(splat.radius, splat.position, splat.velocity, splat.color)?;
                }
            }
        }

        surface.update(
            self.params.paused,
            time_sec,
            self.params.mode,
            self.params.iterations,
            self.params.viscosity,
            self.params.dissipation,
            -self.params.curl,
            self.params.pressure,
        )
    }
}
