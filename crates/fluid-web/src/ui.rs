//! Control panel wiring.
//!
//! Binds DOM inputs by element id onto the shared configuration records.
//! Writes are one-directional and last-write-wins; the frame driver picks
//! them up on its next tick. Missing elements are skipped, so a page may
//! expose any subset of the panel.

use crate::dom;
use crate::renderer::FluidRenderer;
use fluid_core::{
    Effect, FrameDriver, Mode, ObstacleConfig, Resolution, SimParams, SpellPairConfig, SpinConfig,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_controls(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    driver: Rc<RefCell<FrameDriver>>,
    renderer: Rc<RefCell<FluidRenderer>>,
) {
    // Visuals
    {
        let d = driver.clone();
        wire_select(document, "mode", move |v| {
            if let Some(mode) = Mode::from_index(v) {
                d.borrow_mut().params.mode = mode;
            }
        });
    }
    {
        let d = driver.clone();
        let r = renderer.clone();
        let c = canvas.clone();
        wire_select(document, "dye-quality", move |v| {
            if let Some(res) = Resolution::from_divisor(v) {
                d.borrow_mut().params.dye_resolution = res;
                resize_surface(&c, &d, &r);
            }
        });
    }

    // Simulation
    {
        let d = driver.clone();
        let r = renderer.clone();
        let c = canvas.clone();
        wire_select(document, "sim-quality", move |v| {
            if let Some(res) = Resolution::from_divisor(v) {
                d.borrow_mut().params.set_sim_resolution(res);
                resize_surface(&c, &d, &r);
            }
        });
    }
    wire_slider(document, "viscosity", with_params(&driver, |p, v| p.viscosity = v));
    wire_slider(document, "dissipation", with_params(&driver, |p, v| p.dissipation = v));
    wire_slider(document, "curl", with_params(&driver, |p, v| p.curl = v));
    wire_slider(document, "pressure", with_params(&driver, |p, v| p.pressure = v));
    wire_slider(
        document,
        "iterations",
        with_params(&driver, |p, v| p.iterations = v as u32),
    );

    // Pointer
    wire_color(
        document,
        "pointer-color",
        with_params(&driver, |p, rgb: [f32; 3]| {
            p.color = rgb;
            // A manual pick overrides the per-contact random roll.
            p.use_random_color = false;
        }),
    );
    wire_checkbox(
        document,
        "random-color",
        with_params(&driver, |p, v: bool| p.use_random_color = v),
    );
    wire_slider(
        document,
        "pointer-radius",
        with_params(&driver, |p, v| p.pointer_radius = v),
    );
    wire_slider(
        document,
        "pointer-strength",
        with_params(&driver, |p, v| p.pointer_strength = v),
    );
    wire_checkbox(document, "pause", with_params(&driver, |p, v: bool| p.paused = v));

    // Effect selection; switching installs the variant's defaults, which
    // the sliders below then mutate in place.
    {
        let d = driver.clone();
        wire_select(document, "effect", move |v| {
            d.borrow_mut().effect = match v {
                1 => Effect::SpellPair(SpellPairConfig::default()),
                2 => Effect::Spin(SpinConfig::default()),
                _ => Effect::None,
            };
        });
    }

    // Spell pair
    wire_color(document, "spell-left-color", with_spell(&driver, |s, rgb| s.left.color_rgb = rgb));
    wire_slider(document, "spell-left-radius", with_spell(&driver, |s, v| s.left.radius = v));
    wire_slider(document, "spell-left-strength", with_spell(&driver, |s, v| s.left.strength = v));
    wire_slider(document, "spell-left-x", with_spell(&driver, |s, v| s.left.x_offset = v));
    wire_slider(document, "spell-left-y", with_spell(&driver, |s, v| s.left.y_offset = v));
    wire_color(document, "spell-right-color", with_spell(&driver, |s, rgb| s.right.color_rgb = rgb));
    wire_slider(document, "spell-right-radius", with_spell(&driver, |s, v| s.right.radius = v));
    wire_slider(document, "spell-right-strength", with_spell(&driver, |s, v| s.right.strength = v));
    wire_slider(document, "spell-right-x", with_spell(&driver, |s, v| s.right.x_offset = v));
    wire_slider(document, "spell-right-y", with_spell(&driver, |s, v| s.right.y_offset = v));

    // Spin
    wire_slider(document, "spin-rate", with_spin(&driver, |s, v| s.rate = v));
    wire_slider(document, "spin-phase", with_spin(&driver, |s, v| s.phase = v));
    wire_color(document, "spin-color", with_spin(&driver, |s, rgb| s.emitter.color_rgb = rgb));
    wire_slider(document, "spin-radius", with_spin(&driver, |s, v| s.emitter.radius = v));
    wire_slider(document, "spin-strength", with_spin(&driver, |s, v| s.emitter.strength = v));
    wire_slider(document, "spin-x", with_spin(&driver, |s, v| s.emitter.x_offset = v));
    wire_slider(document, "spin-y", with_spin(&driver, |s, v| s.emitter.y_offset = v));

    // Obstacle
    wire_checkbox(
        document,
        "obstacle-enabled",
        with_obstacle(&driver, |o, v: bool| o.enabled = v),
    );
    wire_slider(document, "obstacle-x", with_obstacle(&driver, |o, v| o.x_offset = v));
    wire_slider(document, "obstacle-y", with_obstacle(&driver, |o, v| o.y_offset = v));
    wire_slider(document, "obstacle-size", with_obstacle(&driver, |o, v| o.size = v));
    wire_checkbox(
        document,
        "obstacle-circle",
        with_obstacle(&driver, |o, v: bool| o.circle = v),
    );
    wire_color(document, "obstacle-color", with_obstacle(&driver, |o, rgb| o.color_rgb = rgb));
}

fn resize_surface(
    canvas: &web::HtmlCanvasElement,
    driver: &Rc<RefCell<FrameDriver>>,
    renderer: &Rc<RefCell<FluidRenderer>>,
) {
    dom::sync_canvas_backing_size(canvas);
    let d = driver.borrow();
    if let Err(e) = renderer
        .borrow()
        .resize(d.params.sim_resolution, d.params.dye_resolution)
    {
        log::error!("renderer resize failed: {:?}", e);
    }
}

// ---------------- handler factories ----------------

fn with_params<T: 'static>(
    driver: &Rc<RefCell<FrameDriver>>,
    apply: impl Fn(&mut SimParams, T) + 'static,
) -> impl FnMut(T) + 'static {
    let d = driver.clone();
    move |v| apply(&mut d.borrow_mut().params, v)
}

fn with_obstacle<T: 'static>(
    driver: &Rc<RefCell<FrameDriver>>,
    apply: impl Fn(&mut ObstacleConfig, T) + 'static,
) -> impl FnMut(T) + 'static {
    let d = driver.clone();
    move |v| apply(&mut d.borrow_mut().obstacle, v)
}

// Writes land only while the matching variant is active; a hidden panel's
// stray events are dropped.
fn with_spell<T: 'static>(
    driver: &Rc<RefCell<FrameDriver>>,
    apply: impl Fn(&mut SpellPairConfig, T) + 'static,
) -> impl FnMut(T) + 'static {
    let d = driver.clone();
    move |v| {
        if let Effect::SpellPair(spell) = &mut d.borrow_mut().effect {
            apply(spell, v);
        }
    }
}

fn with_spin<T: 'static>(
    driver: &Rc<RefCell<FrameDriver>>,
    apply: impl Fn(&mut SpinConfig, T) + 'static,
) -> impl FnMut(T) + 'static {
    let d = driver.clone();
    move |v| {
        if let Effect::Spin(spin) = &mut d.borrow_mut().effect {
            apply(spin, v);
        }
    }
}

// ---------------- element wiring ----------------

fn input_element(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

fn wire_slider(document: &web::Document, id: &str, mut handler: impl FnMut(f32) + 'static) {
    if let Some(input) = input_element(document, id) {
        let source = input.clone();
        let closure = Closure::wrap(Box::new(move |_: web::Event| {
            if let Ok(v) = source.value().parse::<f32>() {
                handler(v);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_checkbox(document: &web::Document, id: &str, mut handler: impl FnMut(bool) + 'static) {
    if let Some(input) = input_element(document, id) {
        let source = input.clone();
        let closure = Closure::wrap(Box::new(move |_: web::Event| {
            handler(source.checked());
        }) as Box<dyn FnMut(_)>);
        let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_select(document: &web::Document, id: &str, mut handler: impl FnMut(u32) + 'static) {
    let select = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok());
    if let Some(select) = select {
        let source = select.clone();
        let closure = Closure::wrap(Box::new(move |_: web::Event| {
            if let Ok(v) = source.value().parse::<u32>() {
                handler(v);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_color(document: &web::Document, id: &str, mut handler: impl FnMut([f32; 3]) + 'static) {
    if let Some(input) = input_element(document, id) {
        let source = input.clone();
        let closure = Closure::wrap(Box::new(move |_: web::Event| {
            if let Some(rgb) = parse_hex_color(&source.value()) {
                handler(rgb);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// "#rrggbb" to the GUI 0..255 scale.
fn parse_hex_color(value: &str) -> Option<[f32; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let channel = |range| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some([
        channel(0..2)? as f32,
        channel(2..4)? as f32,
        channel(4..6)? as f32,
    ])
}
