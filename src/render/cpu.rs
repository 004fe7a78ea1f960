use std::sync::Arc;

use crate::assets::{PreparedImage, load_background, load_font, load_logo};
use crate::foundation::config::AssetPaths;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{CardError, CardResult};
use crate::render::backend::FrameRGBA;
use crate::render::text::{TextBrushRgba8, TextLayoutEngine};
use crate::scene::config::{DrawOp, SceneConfig};
use crate::scene::status::Background;

/// CPU rasterizer for [`SceneConfig`]s, powered by `vello_cpu`.
///
/// The font is loaded once up front; backgrounds and logos are read per render.
pub struct CardRenderer {
    assets: AssetPaths,
    text: TextLayoutEngine,
}

impl CardRenderer {
    /// Fails when the font is missing or unreadable.
    pub fn new(assets: AssetPaths) -> CardResult<Self> {
        let font_bytes = load_font(&assets.font)?;
        let text = TextLayoutEngine::new(font_bytes).map_err(|e| {
            CardError::asset(format!("font '{}': {e}", assets.font.display()))
        })?;
        tracing::debug!(family = text.family_name(), "registered card font");
        Ok(Self { assets, text })
    }

    /// Paint `scene` over its background template.
    ///
    /// The frame takes the template's native size.
    #[tracing::instrument(skip_all, fields(status = ?scene.status, ops = scene.ops.len()))]
    pub fn render(&mut self, scene: &SceneConfig) -> CardResult<FrameRGBA> {
        let bg_path = match scene.background {
            Background::Live => &self.assets.background_live,
            Background::Upcoming => &self.assets.background_upcoming,
        };
        let background = load_background(bg_path)?;
        let width_u16: u16 = background
            .width
            .try_into()
            .map_err(|_| CardError::render("background width exceeds u16"))?;
        let height_u16: u16 = background
            .height
            .try_into()
            .map_err(|_| CardError::render("background height exceeds u16"))?;
        tracing::debug!(
            width = background.width,
            height = background.height,
            path = %bg_path.display(),
            "loaded background"
        );

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        draw_image(&mut ctx, &background, Point::new(0.0, 0.0))?;

        for op in &scene.ops {
            match op {
                DrawOp::Text {
                    text,
                    at,
                    size_px,
                    color,
                } => self.draw_text(&mut ctx, text, *at, *size_px, *color)?,
                DrawOp::Logo { team, path, at } => {
                    let logo = load_logo(path)?;
                    tracing::debug!(team = %team, path = %path.display(), "pasting logo");
                    draw_image(&mut ctx, &logo, *at)?;
                }
                DrawOp::Fill { color } => {
                    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    ctx.set_paint(to_cpu_color(*color));
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                        0.0,
                        0.0,
                        f64::from(background.width),
                        f64::from(background.height),
                    ));
                }
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: background.width,
            height: background.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        at: Point,
        size_px: f32,
        color: Rgba8,
    ) -> CardResult<()> {
        let layout = self
            .text
            .layout_line(text, size_px, TextBrushRgba8::from(color))?;
        ctx.set_transform(translate(at));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                // Positioned glyphs carry the line baseline and pen advance, so the
                // layout's top-left lands on `at`.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(self.text.font())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }
}

fn translate(at: Point) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::translate((f64::from(at.x), f64::from(at.y)))
}

fn to_cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

/// Paint a prepared image with its top-left corner at `at`, source-over.
fn draw_image(
    ctx: &mut vello_cpu::RenderContext,
    img: &PreparedImage,
    at: Point,
) -> CardResult<()> {
    let pixmap = pixmap_from_premul_bytes(&img.rgba8_premul, img.width, img.height)?;
    ctx.set_transform(translate(at));
    ctx.set_paint(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    });
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(img.width),
        f64::from(img.height),
    ));
    Ok(())
}

fn pixmap_from_premul_bytes(bytes: &[u8], width: u32, height: u32) -> CardResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CardError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(CardError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}
