//! Bindings to the external `fluid-simulation` renderer module.
//!
//! The renderer is an opaque collaborator: grid allocation, advection and
//! the pressure solve all live on the far side of this boundary. This
//! module only adapts its fixed operation set to the core's
//! `FluidSurface` seam.

use fluid_core::{FluidSurface, Mode, Resolution};
use glam::Vec2;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "fluid-simulation")]
extern "C" {
    type Renderer;

    #[wasm_bindgen(static_method_of = Renderer, catch)]
    fn create(
        canvas_id: &str,
        sim_resolution: u32,
        dye_resolution: u32,
    ) -> Result<Renderer, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn resize(this: &Renderer, sim_resolution: u32, dye_resolution: u32) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn splat(
        this: &Renderer,
        radius: f32,
        position: &[f32],
        velocity: &[f32],
        color: &[f32],
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = setObstacle)]
    fn set_obstacle(
        this: &Renderer,
        size: Option<f32>,
        position: &[f32],
        color: &[f32],
        is_circle: bool,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn update(
        this: &Renderer,
        pause: bool,
        time: f32,
        mode: u32,
        iterations: u32,
        viscosity: f32,
        dissipation: f32,
        curl: f32,
        pressure: f32,
    ) -> Result<(), JsValue>;
}

/// Owning wrapper around the external renderer instance.
pub struct FluidRenderer {
    inner: Renderer,
}

impl FluidRenderer {
    /// Construct the simulation grids on the canvas with the given id.
    pub fn create(canvas_id: &str, sim: Resolution, dye: Resolution) -> anyhow::Result<Self> {
        let inner = Renderer::create(canvas_id, sim as u32, dye as u32)
            .map_err(|e| anyhow::anyhow!("renderer create failed: {:?}", e))?;
        Ok(Self { inner })
    }

    /// Reallocate the internal grids; required after every backing-size
    /// change.
    pub fn resize(&self, sim: Resolution, dye: Resolution) -> anyhow::Result<()> {
        self.inner.resize(sim as u32, dye as u32).map_err(js_err)
    }
}

impl FluidSurface for FluidRenderer {
    fn splat(
        &mut self,
        radius: f32,
        position: Vec2,
        velocity: Vec2,
        color: [f32; 3],
    ) -> anyhow::Result<()> {
        self.inner
            .splat(
                radius,
                &[position.x, position.y],
                &[velocity.x, velocity.y],
                &color,
            )
            .map_err(js_err)
    }

    fn set_obstacle(
        &mut self,
        size: Option<f32>,
        position: Vec2,
        color: [f32; 3],
        circle: bool,
    ) -> anyhow::Result<()> {
        self.inner
            .set_obstacle(size, &[position.x, position.y], &color, circle)
            .map_err(js_err)
    }

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
    ) -> anyhow::Result<()> {
        self.inner
            .update(
                paused,
                time_sec,
                mode as u32,
                iterations,
                viscosity,
                dissipation,
                curl,
                pressure,
            )
            .map_err(js_err)
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}
