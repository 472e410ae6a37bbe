use std::collections::HashMap;
use std::ops::Range;

use image::{imageops::FilterType, Rgb, RgbImage, RgbaImage};
use nalgebra::Vector2;

use super::{
    draw_command::{lerp_color, DrawCommand, Fill, ImageAsset, Stroke, VerticalAnchor},
    surface::{CommandCounts, DrawingSurface},
};

pub const CLEAR_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Used in place of a sprite that was never loaded.
pub fn fallback_color(asset: ImageAsset) -> Rgb<u8> {
    match asset {
        ImageAsset::Sun => Rgb([255, 204, 0]),
        ImageAsset::Grass => Rgb([76, 153, 0]),
    }
}

/**
 * Software rasterizer for draw commands. Every command is painted directly into
 * an RGB image buffer, in order, with later commands drawn on top. Pixels are
 * sampled at their centers; there is no antialiasing.
 */
pub struct RasterSurface {
    pub imgbuf: RgbImage,
    sprites: HashMap<ImageAsset, RgbaImage>,
    pub counts: CommandCounts,
}

impl RasterSurface {
    pub fn new(resolution: [u32; 2]) -> RasterSurface {
        RasterSurface {
            imgbuf: RgbImage::from_pixel(resolution[0], resolution[1], CLEAR_COLOR),
            sprites: HashMap::new(),
            counts: CommandCounts::default(),
        }
    }

    pub fn insert_sprite(&mut self, asset: ImageAsset, sprite: RgbaImage) {
        self.sprites.insert(asset, sprite);
    }

    fn fill_all(&mut self, color: Rgb<u8>) {
        for (_, _, pixel) in self.imgbuf.enumerate_pixels_mut() {
            *pixel = color;
        }
    }

    /// Visits the center of every on-canvas pixel that overlaps the box `[lower, upper]`.
    fn for_each_pixel_in_box<F>(&mut self, lower: Vector2<f64>, upper: Vector2<f64>, mut paint: F)
    where
        F: FnMut(&Vector2<f64>) -> Option<Rgb<u8>>,
    {
        let (width, height) = self.imgbuf.dimensions();
        for x in pixel_range(lower[0], upper[0], width) {
            for y in pixel_range(lower[1], upper[1], height) {
                let point = Vector2::new(x as f64 + 0.5, y as f64 + 0.5);
                if let Some(color) = paint(&point) {
                    self.imgbuf.put_pixel(x, y, color);
                }
            }
        }
    }

    fn draw_segment(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Rgb<u8>, width: f64) {
        let half_width = (0.5 * width).max(0.5);
        let pad = Vector2::new(half_width, half_width);
        let lower = from.inf(&to) - pad;
        let upper = from.sup(&to) + pad;
        self.for_each_pixel_in_box(lower, upper, |point| {
            if distance_to_segment(point, &from, &to) <= half_width {
                Some(color)
            } else {
                None
            }
        });
    }

    fn draw_ellipse(
        &mut self,
        center: Vector2<f64>,
        radii: Vector2<f64>,
        fill: &Fill,
        stroke: Option<Stroke>,
    ) {
        if radii[0] <= 0.0 || radii[1] <= 0.0 {
            return;
        }
        let min_radius = radii[0].min(radii[1]);
        let half_stroke = stroke.map_or(0.0, |stroke| 0.5 * stroke.thickness);
        let padding = Vector2::new(half_stroke, half_stroke);
        self.for_each_pixel_in_box(
            center - radii - padding,
            center + radii + padding,
            |point| {
                let offset = point - center;
                let radial_distance =
                    ((offset[0] / radii[0]).powi(2) + (offset[1] / radii[1]).powi(2)).sqrt();
                // The stroke is centered on the boundary.
                if let Some(stroke) = stroke {
                    if ((1.0 - radial_distance) * min_radius).abs() < half_stroke {
                        return Some(stroke.color);
                    }
                }
                if radial_distance > 1.0 {
                    return None;
                }
                Some(fill.color_at(radial_distance))
            },
        );
    }

    fn draw_polygon(&mut self, points: &[Vector2<f64>], color: Rgb<u8>) {
        if points.len() < 3 {
            return;
        }
        let mut lower = points[0];
        let mut upper = points[0];
        for point in points.iter() {
            lower = lower.inf(point);
            upper = upper.sup(point);
        }
        self.for_each_pixel_in_box(lower, upper, |point| {
            if polygon_contains(points, point) {
                Some(color)
            } else {
                None
            }
        });
    }

    fn draw_image_rect(
        &mut self,
        asset: ImageAsset,
        left: f64,
        anchor: VerticalAnchor,
        width: f64,
        height: f64,
    ) {
        let top = match anchor {
            VerticalAnchor::Top(top) => top,
            VerticalAnchor::Bottom(bottom) => self.imgbuf.height() as f64 - bottom - height,
        };
        let pixel_width = width.round() as u32;
        let pixel_height = height.round() as u32;
        if pixel_width == 0 || pixel_height == 0 {
            return;
        }

        let sprite = self.sprites.get(&asset).map(|sprite| {
            image::imageops::resize(sprite, pixel_width, pixel_height, FilterType::Triangle)
        });
        let fallback = fallback_color(asset);
        let origin = Vector2::new(left.round(), top.round());

        let (canvas_width, canvas_height) = self.imgbuf.dimensions();
        for i in 0..pixel_width {
            for j in 0..pixel_height {
                let x = origin[0] as i64 + i as i64;
                let y = origin[1] as i64 + j as i64;
                if x < 0 || y < 0 || x >= canvas_width as i64 || y >= canvas_height as i64 {
                    continue;
                }
                let pixel = self.imgbuf.get_pixel_mut(x as u32, y as u32);
                match &sprite {
                    Some(sprite) => {
                        let source = sprite.get_pixel(i, j);
                        let alpha = source[3] as f64 / 255.0;
                        *pixel = lerp_color(
                            *pixel,
                            Rgb([source[0], source[1], source[2]]),
                            alpha,
                        );
                    }
                    None => *pixel = fallback,
                }
            }
        }
    }
}

impl DrawingSurface for RasterSurface {
    fn width(&self) -> f64 {
        self.imgbuf.width() as f64
    }

    fn height(&self) -> f64 {
        self.imgbuf.height() as f64
    }

    fn clear(&mut self) {
        self.fill_all(CLEAR_COLOR);
        self.counts = CommandCounts::default();
    }

    fn draw(&mut self, command: DrawCommand) {
        self.counts.record(&command);
        match command {
            DrawCommand::Background { color } => self.fill_all(color),
            DrawCommand::Segment {
                from,
                to,
                color,
                width,
            } => self.draw_segment(from, to, color, width),
            DrawCommand::Ellipse {
                center,
                radii,
                fill,
                stroke,
            } => self.draw_ellipse(center, radii, &fill, stroke),
            DrawCommand::Polygon { points, fill } => self.draw_polygon(&points, fill),
            DrawCommand::ImageRect {
                asset,
                left,
                anchor,
                width,
                height,
            } => self.draw_image_rect(asset, left, anchor, width, height),
        }
    }
}

/// Indices of the pixels whose centers could fall within `[low, upp]`, clipped to `[0, n)`.
fn pixel_range(low: f64, upp: f64, n: u32) -> Range<u32> {
    let begin = low.floor().max(0.0).min(n as f64) as u32;
    let end = upp.ceil().max(0.0).min(n as f64) as u32;
    begin..end
}

pub fn distance_to_segment(point: &Vector2<f64>, from: &Vector2<f64>, to: &Vector2<f64>) -> f64 {
    let delta = to - from;
    let length_squared = delta.norm_squared();
    if length_squared == 0.0 {
        return (point - from).norm();
    }
    let alpha = ((point - from).dot(&delta) / length_squared).clamp(0.0, 1.0);
    (point - (from + alpha * delta)).norm()
}

/// Even-odd rule.
pub fn polygon_contains(vertices: &[Vector2<f64>], point: &Vector2<f64>) -> bool {
    if vertices.is_empty() {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (a, b) = (vertices[i], vertices[j]);
        if (a[1] > point[1]) != (b[1] > point[1]) {
            let x_cross = a[0] + (point[1] - a[1]) * (b[0] - a[0]) / (b[1] - a[1]);
            if point[0] < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
