use crate::core::texture::{procedural_pixels, TextureKey, TexturePixels};
use wasm_bindgen::JsCast;
use web_sys as web;

pub const TEXT_FONT_FAMILY: &str = "\"Courier New\", monospace";

/// Rasterise a text key on an offscreen 2D canvas. `None` outside a browser
/// or when the 2D context is unavailable.
pub fn text_pixels(key: &TextureKey) -> Option<TexturePixels> {
    let TextureKey::Text {
        text,
        font_px,
        color,
        width,
        height,
    } = key
    else {
        return None;
    };
    let document = web::window()?.document()?;
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    canvas.set_width(*width);
    canvas.set_height(*height);
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
    ctx.set_font(&format!("800 {}px {}", font_px, TEXT_FONT_FAMILY));
    ctx.set_fill_style_str(color);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(text, *width as f64 / 2.0, *height as f64 / 2.0)
        .ok()?;
    let data = ctx
        .get_image_data(0.0, 0.0, *width as f64, *height as f64)
        .ok()?;
    Some(TexturePixels {
        width: *width,
        height: *height,
        rgba: data.data().0,
    })
}

/// Pixels for any key: procedural in Rust, text through the canvas.
pub fn pixels_for(key: &TextureKey) -> Option<TexturePixels> {
    match key {
        TextureKey::Text { .. } => text_pixels(key),
        _ => procedural_pixels(key),
    }
}
