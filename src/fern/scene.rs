use image::Rgb;
use nalgebra::Vector2;
use rand::Rng;

use crate::core::{
    draw_command::{DrawCommand, Fill, ImageAsset, VerticalAnchor},
    surface::DrawingSurface,
};

use super::fractal_fern::{generate_fern, FernParams};

pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([215, 246, 255]);
/// Straight up, in screen coordinates.
pub const INITIAL_HEADING: f64 = 3.0 * std::f64::consts::FRAC_PI_2;

pub const POT_WIDTH: f64 = 80.0;
pub const POT_HEIGHT: f64 = 70.0;
pub const POT_COLOR: Rgb<u8> = Rgb([165, 42, 42]);
/// Ovals are kept below this distance under the fern anchor.
pub const POT_BOTTOM_OFFSET: f64 = 55.0;

pub const SUN_SIZE: f64 = 120.0;
pub const SUN_OFFSET: f64 = 20.0;
pub const GRASS_HEIGHT: f64 = 100.0;

/// Where the fern grows from, and where the pot hangs from. Truncated to whole pixels.
pub fn fern_anchor(canvas_width: f64, canvas_height: f64) -> Vector2<f64> {
    Vector2::new(
        (canvas_width / 2.0).trunc(),
        (canvas_height * 5.0 / 6.0).trunc(),
    )
}

pub fn pot_bottom(canvas_height: f64) -> f64 {
    canvas_height * 5.0 / 6.0 + POT_BOTTOM_OFFSET
}

/**
 * Trapezoid with its wide edge on top, centered horizontally on `anchor`.
 */
pub fn pot(anchor: &Vector2<f64>, width: f64, height: f64) -> DrawCommand {
    let (x, y) = (anchor[0], anchor[1]);
    DrawCommand::Polygon {
        points: vec![
            Vector2::new(x - width / 2.0, y),
            Vector2::new(x + width / 2.0, y),
            Vector2::new(x + width / 4.0, y + height),
            Vector2::new(x - width / 4.0, y + height),
        ],
        fill: POT_COLOR,
    }
}

/**
 * Moves an oval's vertical center so that it sits below the pot, then pulls it
 * back up so that it stays on the canvas. Both bounds hold whenever the band
 * between them is taller than the oval. On short canvases, where they cannot,
 * the canvas bottom wins and the oval overlaps the pot instead.
 */
pub fn clamp_oval_center(y: f64, oval_height: f64, pot_bottom: f64, canvas_height: f64) -> f64 {
    let half_height = oval_height / 2.0;
    let below_pot = if y - half_height < pot_bottom {
        pot_bottom + half_height
    } else {
        y
    };
    below_pot.min(canvas_height - half_height)
}

/// Randomly colored pebbles scattered in the band under the pot.
pub fn ovals<R: Rng + ?Sized>(canvas_width: f64, canvas_height: f64, rng: &mut R) -> Vec<DrawCommand> {
    let count = rng.gen_range(80..130_u32);
    let bottom = pot_bottom(canvas_height);
    let x_upp = (canvas_width as u32).max(1);
    let y_low = (canvas_height as u32) / 2;
    let y_upp = (canvas_height as u32).max(y_low + 1);

    (0..count)
        .map(|_| {
            let width = rng.gen_range(10..30_u32) as f64;
            let height = rng.gen_range(10..20_u32) as f64;
            let x = rng.gen_range(0..x_upp) as f64;
            let y = rng.gen_range(y_low..y_upp) as f64;
            let color = Rgb([rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>()]);
            DrawCommand::Ellipse {
                center: Vector2::new(x, clamp_oval_center(y, height, bottom, canvas_height)),
                radii: Vector2::new(width / 2.0, height / 2.0),
                fill: Fill::Solid(color),
                stroke: None,
            }
        })
        .collect()
}

pub fn sun() -> DrawCommand {
    DrawCommand::ImageRect {
        asset: ImageAsset::Sun,
        left: SUN_OFFSET,
        anchor: VerticalAnchor::Top(SUN_OFFSET),
        width: SUN_SIZE,
        height: SUN_SIZE,
    }
}

pub fn grass(canvas_width: f64) -> DrawCommand {
    DrawCommand::ImageRect {
        asset: ImageAsset::Grass,
        left: 0.0,
        anchor: VerticalAnchor::Bottom(0.0),
        width: canvas_width,
        height: GRASS_HEIGHT,
    }
}

/**
 * Erases the surface and draws the whole scene onto it: background, the fern
 * growing out of its pot, pebbles, sun, and a strip of grass along the bottom.
 */
pub fn render_scene<R, S>(params: &FernParams, rng: &mut R, surface: &mut S)
where
    R: Rng,
    S: DrawingSurface + ?Sized,
{
    let (width, height) = (surface.width(), surface.height());
    let anchor = fern_anchor(width, height);

    surface.clear();
    surface.draw(DrawCommand::Background {
        color: BACKGROUND_COLOR,
    });
    generate_fern(params, anchor, INITIAL_HEADING, rng, surface);
    surface.draw(pot(&anchor, POT_WIDTH, POT_HEIGHT));
    for oval in ovals(width, height, rng) {
        surface.draw(oval);
    }
    surface.draw(sun());
    surface.draw(grass(width));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fern_anchor_truncates() {
        assert_eq!(fern_anchor(801.0, 601.0), Vector2::new(400.0, 500.0));
        assert_eq!(fern_anchor(800.0, 600.0), Vector2::new(400.0, 500.0));
    }

    #[test]
    fn test_pot_geometry() {
        let anchor = Vector2::new(400.0, 500.0);
        match pot(&anchor, POT_WIDTH, POT_HEIGHT) {
            DrawCommand::Polygon { points, fill } => {
                assert_eq!(fill, POT_COLOR);
                assert_eq!(
                    points,
                    vec![
                        Vector2::new(360.0, 500.0),
                        Vector2::new(440.0, 500.0),
                        Vector2::new(420.0, 570.0),
                        Vector2::new(380.0, 570.0),
                    ]
                );
            }
            _ => panic!("the pot must be a polygon"),
        }
    }

    #[test]
    fn test_clamp_oval_center() {
        let (bottom, canvas_height) = (555.0, 600.0);
        // Too high: pushed under the pot.
        assert_eq!(clamp_oval_center(500.0, 10.0, bottom, canvas_height), 560.0);
        // Hangs off the bottom edge: pulled back up.
        assert_eq!(clamp_oval_center(598.0, 10.0, bottom, canvas_height), 595.0);
        // Already in the band.
        assert_eq!(clamp_oval_center(580.0, 10.0, bottom, canvas_height), 580.0);

        // The band is shorter than the oval: the canvas bottom wins.
        assert_eq!(clamp_oval_center(300.0, 20.0, 395.0, 400.0), 390.0);
        assert_eq!(clamp_oval_center(399.0, 20.0, 395.0, 400.0), 390.0);
    }

    #[test]
    fn test_image_rects() {
        assert_eq!(
            sun(),
            DrawCommand::ImageRect {
                asset: ImageAsset::Sun,
                left: 20.0,
                anchor: VerticalAnchor::Top(20.0),
                width: 120.0,
                height: 120.0,
            }
        );
        assert_eq!(
            grass(640.0),
            DrawCommand::ImageRect {
                asset: ImageAsset::Grass,
                left: 0.0,
                anchor: VerticalAnchor::Bottom(0.0),
                width: 640.0,
                height: 100.0,
            }
        );
    }
}
