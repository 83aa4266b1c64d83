use crate::constants::{
    LABEL_FONT, LABEL_TEXTURE_HEIGHT, LABEL_TEXTURE_WIDTH, UI_PLATE_FONT, UI_PLATE_TEXTURE_HEIGHT,
    UI_PLATE_TEXTURE_WIDTH,
};
use glam::Vec4;
use orbit_core::texture::TextureImage;
use wasm_bindgen::JsCast;
use web_sys as web;

fn css_color(c: Vec4) -> String {
    let to = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.3})",
        to(c.x),
        to(c.y),
        to(c.z),
        c.w.clamp(0.0, 1.0)
    )
}

fn offscreen_2d(
    document: &web::Document,
    width: u32,
    height: u32,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    Ok(ctx)
}

fn read_back(ctx: &web::CanvasRenderingContext2d, w: f64, h: f64) -> anyhow::Result<TextureImage> {
    let data = ctx
        .get_image_data(0.0, 0.0, w, h)
        .map_err(|e| anyhow::anyhow!("get_image_data: {:?}", e))?;
    Ok(TextureImage {
        width: data.width(),
        height: data.height(),
        rgba: data.data().0,
    })
}

/// Draw a service name into an offscreen 2D canvas and read it back as RGBA:
/// white text with a light outline and a glow in the service colour, on a
/// transparent background.
pub fn rasterize_label(
    document: &web::Document,
    text: &str,
    color: Vec4,
) -> anyhow::Result<TextureImage> {
    let ctx = offscreen_2d(document, LABEL_TEXTURE_WIDTH, LABEL_TEXTURE_HEIGHT)?;
    let w = LABEL_TEXTURE_WIDTH as f64;
    let h = LABEL_TEXTURE_HEIGHT as f64;
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_font(LABEL_FONT);

    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
    ctx.set_line_width(8.0);
    ctx.stroke_text_with_max_width(text, w * 0.5, h * 0.5, w * 0.92)
        .map_err(|e| anyhow::anyhow!("stroke_text: {:?}", e))?;

    ctx.set_shadow_color(&css_color(color.truncate().extend(1.0)));
    ctx.set_shadow_blur(20.0);
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_text_with_max_width(text, w * 0.5, h * 0.5, w * 0.92)
        .map_err(|e| anyhow::anyhow!("fill_text: {:?}", e))?;

    read_back(&ctx, w, h)
}

/// Black caption on an opaque white plate.
pub fn rasterize_plate(document: &web::Document, text: &str) -> anyhow::Result<TextureImage> {
    let ctx = offscreen_2d(document, UI_PLATE_TEXTURE_WIDTH, UI_PLATE_TEXTURE_HEIGHT)?;
    let w = UI_PLATE_TEXTURE_WIDTH as f64;
    let h = UI_PLATE_TEXTURE_HEIGHT as f64;
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.set_font(UI_PLATE_FONT);
    ctx.set_fill_style_str("#000000");
    ctx.fill_text(text, w * 0.5, h * 0.5)
        .map_err(|e| anyhow::anyhow!("fill_text: {:?}", e))?;
    read_back(&ctx, w, h)
}
