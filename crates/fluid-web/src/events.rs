//! Browser input and lifecycle wiring.
//!
//! Every handler converts page coordinates to device pixels with the Y
//! axis flipped (the simulation origin is bottom-left) before feeding the
//! pointer tracker. Handlers run at event cadence; the tracker's moved
//! flag reconciles that with the frame loop.

use crate::dom;
use crate::renderer::FluidRenderer;
use fluid_core::color::random_color;
use fluid_core::constants::{RANDOM_HUE, RANDOM_LIGHTNESS, RANDOM_SATURATION};
use fluid_core::FrameDriver;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct EventWiring {
    pub canvas: web::HtmlCanvasElement,
    pub driver: Rc<RefCell<FrameDriver>>,
    pub renderer: Rc<RefCell<FluidRenderer>>,
    pub rng: Rc<RefCell<StdRng>>,
}

pub fn wire_event_handlers(w: EventWiring) {
    wire_mouse(&w);
    wire_touch(&w);
    wire_keyboard(&w);
    wire_visibility(&w);
    wire_resize(&w);
}

// Page coordinates are top-left based; the simulation wants bottom-left
// device pixels.
fn contact_point(canvas: &web::HtmlCanvasElement, page_x: i32, page_y: i32) -> (f32, f32) {
    (
        dom::pixel_scale(page_x as f64),
        dom::pixel_scale((canvas.client_height() - page_y) as f64),
    )
}

fn roll_pointer_color(driver: &mut FrameDriver, rng: &mut StdRng) {
    if !driver.params.use_random_color {
        return;
    }

    let rgb = random_color(rng, RANDOM_HUE, RANDOM_SATURATION, RANDOM_LIGHTNESS);
    driver.params.color = [rgb[0] * 255.0, rgb[1] * 255.0, rgb[2] * 255.0];
}

fn wire_mouse(w: &EventWiring) {
    // down
    {
        let canvas = w.canvas.clone();
        let driver = w.driver.clone();
        let rng = w.rng.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let (x, y) = contact_point(&canvas, ev.page_x(), ev.page_y());
            let mut d = driver.borrow_mut();
            d.pointer.down(x, y);
            roll_pointer_color(&mut d, &mut rng.borrow_mut());
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // move
    {
        let canvas = w.canvas.clone();
        let driver = w.driver.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let (x, y) = contact_point(&canvas, ev.page_x(), ev.page_y());
            let mut d = driver.borrow_mut();
            let strength = d.params.pointer_strength;
            d.pointer.update(x, y, strength);
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // up, window level so releases outside the canvas still end the contact
    {
        let driver = w.driver.clone();
        let closure = Closure::wrap(Box::new(move |_: web::MouseEvent| {
            driver.borrow_mut().pointer.up();
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

fn wire_touch(w: &EventWiring) {
    // start
    {
        let canvas = w.canvas.clone();
        let driver = w.driver.clone();
        let rng = w.rng.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
            if let Some(touch) = ev.target_touches().get(0) {
                let (x, y) = contact_point(&canvas, touch.page_x(), touch.page_y());
                let mut d = driver.borrow_mut();
                d.pointer.down(x, y);
                roll_pointer_color(&mut d, &mut rng.borrow_mut());
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // move
    {
        let canvas = w.canvas.clone();
        let driver = w.driver.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
            if let Some(touch) = ev.target_touches().get(0) {
                let (x, y) = contact_point(&canvas, touch.page_x(), touch.page_y());
                let mut d = driver.borrow_mut();
                let strength = d.params.pointer_strength;
                d.pointer.update(x, y, strength);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // end
    {
        let driver = w.driver.clone();
        let closure = Closure::wrap(Box::new(move |_: web::TouchEvent| {
            driver.borrow_mut().pointer.up();
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

fn wire_keyboard(w: &EventWiring) {
    let driver = w.driver.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.code() == "Space" {
            let mut d = driver.borrow_mut();
            d.params.paused = !d.params.paused;
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_visibility(w: &EventWiring) {
    if let Some(document) = dom::window_document() {
        let driver = w.driver.clone();
        let doc = document.clone();
        let mut was_paused = false;
        let closure = Closure::wrap(Box::new(move || {
            let mut d = driver.borrow_mut();
            if doc.hidden() {
                was_paused = d.params.paused;
                d.params.paused = true;
                // End any live contact so no stale velocity survives
                // backgrounding.
                d.pointer.up();
            } else if !was_paused {
                d.params.paused = false;
            }
        }) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_resize(w: &EventWiring) {
    let canvas = w.canvas.clone();
    let driver = w.driver.clone();
    let renderer = w.renderer.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let d = driver.borrow();
        if let Err(e) = renderer
            .borrow()
            .resize(d.params.sim_resolution, d.params.dye_resolution)
        {
            log::error!("renderer resize failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
