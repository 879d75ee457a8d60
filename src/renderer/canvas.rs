//! Canvas 2D display surface

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::resources::Resources;
use super::scene::{DrawCommand, Scene};

/// Draws scenes onto a canvas appended to the page body
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    resources: Resources,
}

impl CanvasRenderer {
    /// Create the canvas, size it and append it to the document body
    pub fn new(
        document: &Document,
        resources: Resources,
        width: f32,
        height: f32,
    ) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&canvas)?;

        log::info!("Canvas {}x{} created", width, height);
        Ok(Self {
            canvas,
            ctx,
            resources,
        })
    }

    /// Replay a scene
    pub fn render(&self, scene: &Scene) -> Result<(), JsValue> {
        // Only the width follows the map; rows are fixed for a session
        let width = scene.width as u32;
        if self.canvas.width() != width {
            self.canvas.set_width(width);
            log::debug!("Canvas width now {}", width);
        }

        for command in &scene.commands {
            self.draw(command)?;
        }
        Ok(())
    }

    fn draw(&self, command: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear {
                x,
                y,
                width,
                height,
            } => {
                ctx.clear_rect(*x as f64, *y as f64, *width as f64, *height as f64);
            }
            DrawCommand::Image { sprite, x, y } => match self.resources.get(*sprite) {
                Some(image) => {
                    ctx.draw_image_with_html_image_element(image, *x as f64, *y as f64)?
                }
                None => log::warn!("Sprite {:?} not loaded", sprite),
            },
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                )?;
                ctx.set_stroke_style_str(color);
                ctx.stroke();
            }
            DrawCommand::Text {
                text,
                x,
                y,
                font,
                align,
                color,
            } => {
                ctx.set_font(font);
                ctx.set_text_align(align.as_str());
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, *x as f64, *y as f64)?;
            }
        }
        Ok(())
    }
}
