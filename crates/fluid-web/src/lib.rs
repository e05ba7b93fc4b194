#![cfg(target_arch = "wasm32")]

use crate::renderer::FluidRenderer;
use fluid_core::{FrameDriver, SimParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod renderer;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fluid-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Size the backing store before the renderer allocates its grids.
    dom::sync_canvas_backing_size(&canvas);

    let mobile = dom::is_mobile();
    let params = SimParams::new(mobile);
    let renderer = FluidRenderer::create(
        constants::CANVAS_ID,
        params.sim_resolution,
        params.dye_resolution,
    )?;
    log::info!("renderer ready (mobile={})", mobile);

    let driver = Rc::new(RefCell::new(FrameDriver::new(params)));
    let renderer = Rc::new(RefCell::new(renderer));
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));

    events::wire_event_handlers(events::EventWiring {
        canvas: canvas.clone(),
        driver: driver.clone(),
        renderer: renderer.clone(),
        rng,
    });
    ui::wire_controls(&document, &canvas, driver.clone(), renderer.clone());

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        driver,
        renderer,
        canvas,
    })));

    Ok(())
}
