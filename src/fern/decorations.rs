use image::Rgb;
use nalgebra::Vector2;
use rand::Rng;

use crate::core::draw_command::{DrawCommand, Fill, GradientStop, Stroke};

pub const BERRY_RADIUS: f64 = 2.25;
pub const BERRY_CENTER_COLOR: Rgb<u8> = Rgb([139, 0, 139]); // dark magenta
pub const BERRY_EDGE_COLOR: Rgb<u8> = Rgb([147, 112, 219]); // medium purple
pub const BERRY_STROKE: Stroke = Stroke {
    color: Rgb([72, 61, 139]), // dark slate blue
    thickness: 1.0,
};

/// Distance from the pentagon center to each vertex.
pub const PENTAGON_RADIUS: f64 = 4.0;
pub const PENTAGON_COLOR: Rgb<u8> = Rgb([250, 250, 210]); // light goldenrod yellow

pub fn berry_fill() -> Fill {
    Fill::RadialGradient(vec![
        GradientStop {
            offset: 0.0,
            color: BERRY_CENTER_COLOR,
        },
        GradientStop {
            offset: 0.5,
            color: BERRY_EDGE_COLOR,
        },
    ])
}

/**
 * Round purple berry near `position`. The center is nudged by up to half the
 * radius along each axis so that berries do not sit exactly on the stem.
 */
pub fn berry<R: Rng + ?Sized>(position: &Vector2<f64>, radius: f64, rng: &mut R) -> DrawCommand {
    let x_offset = (rng.gen::<f64>() - 0.5) * radius;
    let y_offset = (rng.gen::<f64>() - 0.5) * radius;
    DrawCommand::circle(
        position + Vector2::new(x_offset, y_offset),
        radius,
        berry_fill(),
        Some(BERRY_STROKE),
    )
}

pub fn pentagon_vertices(center: &Vector2<f64>, radius: f64) -> Vec<Vector2<f64>> {
    let angle_step = 72f64.to_radians();
    (0..5)
        .map(|i| {
            let angle = angle_step * (i as f64);
            center + radius * Vector2::new(angle.cos(), angle.sin())
        })
        .collect()
}

pub fn pentagon(position: &Vector2<f64>) -> DrawCommand {
    DrawCommand::Polygon {
        points: pentagon_vertices(position, PENTAGON_RADIUS),
        fill: PENTAGON_COLOR,
    }
}
