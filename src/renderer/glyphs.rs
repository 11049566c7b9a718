//! Emoji glyph overlay
//!
//! The GPU mesh can't shape emoji, so glyphs go on a transparent 2D canvas
//! stacked over the WebGPU canvas. Both canvases share the letterbox from
//! [`super::pipeline::letterbox`], so each glyph lands on its tile.

use super::pipeline::letterbox;
use crate::settings::Settings;
use crate::sim::GameState;

/// The slice of a 2D canvas context the overlay draws with
pub trait GlyphCanvas {
    type Error;

    fn save(&self);
    fn restore(&self);
    fn set_transform(&self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64)
    -> Result<(), Self::Error>;
    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64);
    fn translate(&self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn rotate(&self, angle: f64) -> Result<(), Self::Error>;
    fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
}

/// Clear the overlay and draw every falling object's emoji at its center
/// and rotation, in arena coordinates letterboxed into `viewport`.
///
/// Each glyph's transform is popped even when drawing it fails.
pub fn draw_glyphs<C: GlyphCanvas>(
    ctx: &C,
    viewport: (f32, f32),
    arena: (f32, f32),
    state: &GameState,
    settings: &Settings,
) -> Result<(), C::Error> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.0 as f64, viewport.1 as f64);

    let (scale, (ox, oy)) = letterbox(viewport, arena);
    let scale = scale as f64;
    ctx.set_transform(scale, 0.0, 0.0, scale, ox as f64, oy as f64)?;

    for obj in &state.objects {
        let center = obj.pos + obj.size / 2.0;
        ctx.save();
        let drawn = ctx
            .translate(center.x as f64, center.y as f64)
            .and_then(|_| ctx.rotate(settings.display_rotation(obj.rotation) as f64))
            .and_then(|_| ctx.fill_text(obj.kind.emoji(), 0.0, 0.0));
        ctx.restore();
        drawn?;
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::{GlyphCanvas, draw_glyphs};
    use crate::consts::GLYPH_FONT;
    use crate::error::GameError;
    use crate::settings::Settings;
    use crate::sim::GameState;

    impl GlyphCanvas for CanvasRenderingContext2d {
        type Error = JsValue;

        fn save(&self) {
            CanvasRenderingContext2d::save(self)
        }
        fn restore(&self) {
            CanvasRenderingContext2d::restore(self)
        }
        fn set_transform(
            &self,
            a: f64,
            b: f64,
            c: f64,
            d: f64,
            e: f64,
            f: f64,
        ) -> Result<(), JsValue> {
            CanvasRenderingContext2d::set_transform(self, a, b, c, d, e, f)
        }
        fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
            CanvasRenderingContext2d::clear_rect(self, x, y, w, h)
        }
        fn translate(&self, x: f64, y: f64) -> Result<(), JsValue> {
            CanvasRenderingContext2d::translate(self, x, y)
        }
        fn rotate(&self, angle: f64) -> Result<(), JsValue> {
            CanvasRenderingContext2d::rotate(self, angle)
        }
        fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
            CanvasRenderingContext2d::fill_text(self, text, x, y)
        }
    }

    pub struct GlyphLayer {
        ctx: CanvasRenderingContext2d,
        viewport: (f32, f32),
        arena: (f32, f32),
    }

    impl GlyphLayer {
        /// `viewport` is the canvas backing size in device pixels, matching
        /// the WebGPU surface
        pub fn new(
            canvas: &HtmlCanvasElement,
            viewport: (u32, u32),
            arena: (f32, f32),
        ) -> Result<Self, GameError> {
            canvas.set_width(viewport.0);
            canvas.set_height(viewport.1);

            let ctx = canvas
                .get_context("2d")
                .map_err(|e| GameError::Js(format!("{:?}", e)))?
                .ok_or(GameError::MissingElement("glyphs"))?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| GameError::Js("glyph canvas has no 2d context".to_string()))?;

            ctx.set_font(GLYPH_FONT);
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");

            Ok(Self {
                ctx,
                viewport: (viewport.0 as f32, viewport.1 as f32),
                arena,
            })
        }

        pub fn draw(&self, state: &GameState, settings: &Settings) -> Result<(), GameError> {
            draw_glyphs(&self.ctx, self.viewport, self.arena, state, settings)
                .map_err(|e| GameError::Js(format!("{:?}", e)))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::GlyphLayer;
