//! requestAnimationFrame loop feeding the frame driver.

use crate::renderer::FluidRenderer;
use fluid_core::FrameDriver;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: Rc<RefCell<FrameDriver>>,
    pub renderer: Rc<RefCell<FluidRenderer>>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self, timestamp_ms: f64) {
        let size = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        let time_sec = (timestamp_ms / 1000.0) as f32;

        let mut driver = self.driver.borrow_mut();
        let mut renderer = self.renderer.borrow_mut();
        if let Err(e) = driver.advance(&mut *renderer, size, time_sec) {
            log::error!("frame error: {:?}", e);
        }
    }
}

/// Start the self-rescheduling animation loop. The next frame is requested
/// before the body runs, so an error inside one frame cannot stall the
/// loop.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
        frame_ctx.borrow_mut().frame(timestamp_ms);
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
