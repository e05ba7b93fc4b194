use crate::constants::MOBILE_UA_NEEDLES;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// CSS/page coordinate to device pixels, floored.
#[inline]
pub fn pixel_scale(value: f64) -> f32 {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    (value * dpr).floor() as f32
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let w_px = pixel_scale(canvas.client_width() as f64) as u32;
    let h_px = pixel_scale(canvas.client_height() as f64) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

/// Handheld sniff from the user agent.
pub fn is_mobile() -> bool {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| {
            let ua = ua.to_lowercase();
            MOBILE_UA_NEEDLES.iter().any(|needle| ua.contains(needle))
        })
        .unwrap_or(false)
}
