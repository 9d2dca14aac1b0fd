use crate::constants::RING_LINE_WIDTH;
use crate::core::glyph::arc_angles;
use crate::core::{Glyph, IndicatorFrame, Rgb};
use web_sys as web;

/// Draw one indicator frame. The caller clears the canvas first.
pub fn draw_indicator(ctx: &web::CanvasRenderingContext2d, frame: &IndicatorFrame, color: Rgb) {
    ctx.set_global_alpha(frame.alpha);
    fill_glyph(ctx, &frame.up, color);
    fill_glyph(ctx, &frame.down, color);
    stroke_ring(ctx, frame, color);
}

fn fill_glyph(ctx: &web::CanvasRenderingContext2d, glyph: &Glyph, color: Rgb) {
    let [a, b, c] = glyph.vertices();
    ctx.set_fill_style_str(&color.rgba(glyph.opacity));
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.line_to(c.x, c.y);
    ctx.close_path();
    ctx.fill();
}

fn stroke_ring(ctx: &web::CanvasRenderingContext2d, frame: &IndicatorFrame, color: Rgb) {
    let (start, end) = arc_angles(frame.sweep);
    ctx.set_stroke_style_str(&color.rgba(1.0));
    ctx.set_line_width(RING_LINE_WIDTH);
    ctx.begin_path();
    if let Err(e) = ctx.arc(frame.center.x, frame.center.y, frame.radius, start, end) {
        log::error!("[render] arc failed: {:?}", e);
    }
    ctx.stroke();
    ctx.close_path();
}
