//! Headless raster backend over tiny-skia.
//!
//! Implements [`DrawSurface`] onto an in-memory pixmap, for PNG export
//! and for tests that want real pixels. Text goes through rusttype
//! glyph rasterization blended straight into the pixmap, since
//! tiny-skia has no text support of its own.

use draftkit_core::{Color, Error, Result};
use image::{Rgb, RgbImage};
use rusttype::{point as rt_point, Scale};
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::fonts;
use crate::surface::{DrawSurface, TextAnchor};

/// An owned RGBA pixmap that the renderer can draw onto.
pub struct RasterSurface {
    pixmap: Pixmap,
}

impl RasterSurface {
    /// Creates a surface of the given pixel size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| Error::Surface {
            message: format!("cannot allocate a {}x{} pixmap", width, height),
        })?;
        Ok(Self { pixmap })
    }

    /// Pixel width.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Pixel height.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Copies the pixels out as an opaque RGB image.
    pub fn to_image(&self) -> RgbImage {
        let width = self.pixmap.width();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }

    /// Saves the surface as a PNG file.
    pub fn save_png(&self, path: &std::path::Path) -> Result<()> {
        self.pixmap.save_png(path).map_err(|e| Error::Surface {
            message: format!("png save failed: {}", e),
        })
    }

    /// Reads back one pixel as an unpremultiplied color. Test helper.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(p.red(), p.green(), p.blue(), p.alpha()))
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(tiny_skia::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        paint.anti_alias = true;
        paint
    }

    fn stroke(width: f64) -> Stroke {
        Stroke {
            width: width as f32,
            line_cap: LineCap::Round,
            ..Default::default()
        }
    }

    /// Polyline path; `smooth` rounds interior joints with quadratic
    /// curves through segment midpoints.
    fn polyline_path(points: &[(f64, f64)], smooth: bool) -> Option<tiny_skia::Path> {
        if points.len() < 2 {
            return None;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(points[0].0 as f32, points[0].1 as f32);
        if smooth && points.len() > 2 {
            for window in points.windows(2).skip(1) {
                let ctrl = window[0];
                let mid = (
                    (window[0].0 + window[1].0) / 2.0,
                    (window[0].1 + window[1].1) / 2.0,
                );
                pb.quad_to(ctrl.0 as f32, ctrl.1 as f32, mid.0 as f32, mid.1 as f32);
            }
            let last = points[points.len() - 1];
            pb.line_to(last.0 as f32, last.1 as f32);
        } else {
            for p in &points[1..] {
                pb.line_to(p.0 as f32, p.1 as f32);
            }
        }
        pb.finish()
    }
}

impl DrawSurface for RasterSurface {
    fn size(&self) -> (f64, f64) {
        (self.pixmap.width() as f64, self.pixmap.height() as f64)
    }

    fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    fn draw_line(&mut self, p1: (f64, f64), p2: (f64, f64), width: f64, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(p1.0 as f32, p1.1 as f32);
        pb.line_to(p2.0 as f32, p2.1 as f32);
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &Self::paint(color),
                &Self::stroke(width),
                Transform::identity(),
                None,
            );
        }
    }

    fn draw_polyline(&mut self, points: &[(f64, f64)], width: f64, color: Color, smooth: bool) {
        if let Some(path) = Self::polyline_path(points, smooth) {
            self.pixmap.stroke_path(
                &path,
                &Self::paint(color),
                &Self::stroke(width),
                Transform::identity(),
                None,
            );
        }
    }

    fn draw_oval(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, fill: Color) {
        let Some(rect) = Rect::from_ltrb(x0 as f32, y0 as f32, x1 as f32, y1 as f32) else {
            return;
        };
        let Some(path) = PathBuilder::from_oval(rect) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &Self::paint(fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, size: f32, color: Color, anchor: TextAnchor) {
        let Some(font) = fonts::label_font() else {
            return;
        };
        let scale = Scale::uniform(size);
        let v_metrics = font.v_metrics(scale);

        let advance: f32 = font
            .layout(text, scale, rt_point(0.0, 0.0))
            .filter_map(|g| g.pixel_bounding_box().map(|b| b.max.x as f32))
            .last()
            .unwrap_or(0.0);
        let origin_x = match anchor {
            TextAnchor::Start => x as f32,
            TextAnchor::Middle => x as f32 - advance / 2.0,
            TextAnchor::End => x as f32 - advance,
        };
        let start = rt_point(origin_x, y as f32 + v_metrics.ascent / 2.0);

        let width = self.pixmap.width() as i32;
        let height = self.pixmap.height() as i32;
        for glyph in font.layout(text, scale, start) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || px >= width || py < 0 || py >= height {
                    return;
                }
                let coverage = (v * color.a as f32 / 255.0).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    return;
                }
                // Source-over in premultiplied space
                let idx = ((py * width + px) * 4) as usize;
                let data = self.pixmap.data_mut();
                let src = [
                    color.r as f32 * coverage,
                    color.g as f32 * coverage,
                    color.b as f32 * coverage,
                    255.0 * coverage,
                ];
                for (i, s) in src.iter().enumerate() {
                    let d = data[idx + i] as f32;
                    data[idx + i] = (s + d * (1.0 - coverage)).round().min(255.0) as u8;
                }
            });
        }
    }
}
