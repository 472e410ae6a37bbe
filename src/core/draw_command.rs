use image::Rgb;
use nalgebra::Vector2;

/**
 * Single color stop within a radial gradient. The `offset` is measured from the
 * center of the shape (0.0) out to its boundary (1.0).
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgb<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Rgb<u8>),
    RadialGradient(Vec<GradientStop>),
}

impl Fill {
    /**
     * Evaluate the fill at a normalized radial distance, where 0.0 is the
     * center and 1.0 is the boundary of the shape. Gradient colors are
     * interpolated linearly between stops and held constant past the ends.
     */
    pub fn color_at(&self, radial_distance: f64) -> Rgb<u8> {
        match self {
            Fill::Solid(color) => *color,
            Fill::RadialGradient(stops) => {
                assert!(!stops.is_empty(), "gradient requires at least one stop");
                let first = stops[0];
                if radial_distance <= first.offset {
                    return first.color;
                }
                for pair in stops.windows(2) {
                    let (low, upp) = (pair[0], pair[1]);
                    // Anything at or below `low.offset` returned on an earlier
                    // window, so the span is positive whenever this divides.
                    if radial_distance <= upp.offset {
                        let alpha = (radial_distance - low.offset) / (upp.offset - low.offset);
                        return lerp_color(low.color, upp.color, alpha);
                    }
                }
                stops[stops.len() - 1].color
            }
        }
    }
}

pub fn lerp_color(a: Rgb<u8>, b: Rgb<u8>, alpha: f64) -> Rgb<u8> {
    let mix = |x: u8, y: u8| -> u8 {
        ((x as f64) * (1.0 - alpha) + (y as f64) * alpha)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgb([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])])
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb<u8>,
    pub thickness: f64,
}

/// Sprites that the scene overlays. Decoding them is up to the surface owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageAsset {
    Sun,
    Grass,
}

/// How an image rectangle is pinned vertically to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalAnchor {
    Top(f64),
    Bottom(f64),
}

/**
 * Everything the fern scene asks a drawing surface to do. Commands are
 * produced and consumed immediately; nothing retains the scene afterwards
 * except whatever the surface itself stores.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background {
        color: Rgb<u8>,
    },
    Segment {
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Rgb<u8>,
        width: f64,
    },
    /// A circle is an ellipse with equal radii.
    Ellipse {
        center: Vector2<f64>,
        radii: Vector2<f64>,
        fill: Fill,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<Vector2<f64>>,
        fill: Rgb<u8>,
    },
    ImageRect {
        asset: ImageAsset,
        left: f64,
        anchor: VerticalAnchor,
        width: f64,
        height: f64,
    },
}

impl DrawCommand {
    pub fn circle(center: Vector2<f64>, radius: f64, fill: Fill, stroke: Option<Stroke>) -> Self {
        DrawCommand::Ellipse {
            center,
            radii: Vector2::new(radius, radius),
            fill,
            stroke,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stop_gradient() -> Fill {
        Fill::RadialGradient(vec![
            GradientStop {
                offset: 0.0,
                color: Rgb([0, 0, 0]),
            },
            GradientStop {
                offset: 0.5,
                color: Rgb([200, 100, 50]),
            },
        ])
    }

    #[test]
    fn test_gradient_endpoints() {
        let fill = two_stop_gradient();
        assert_eq!(fill.color_at(0.0), Rgb([0, 0, 0]));
        assert_eq!(fill.color_at(0.5), Rgb([200, 100, 50]));
        // Held past the last stop, out to the boundary.
        assert_eq!(fill.color_at(1.0), Rgb([200, 100, 50]));
    }

    #[test]
    fn test_gradient_midpoint() {
        let fill = two_stop_gradient();
        assert_eq!(fill.color_at(0.25), Rgb([100, 50, 25]));
    }

    #[test]
    fn test_gradient_coincident_stops_make_a_hard_edge() {
        let fill = Fill::RadialGradient(vec![
            GradientStop {
                offset: 0.0,
                color: Rgb([0, 0, 0]),
            },
            GradientStop {
                offset: 0.5,
                color: Rgb([200, 0, 0]),
            },
            GradientStop {
                offset: 0.5,
                color: Rgb([0, 0, 200]),
            },
            GradientStop {
                offset: 1.0,
                color: Rgb([0, 0, 100]),
            },
        ]);
        assert_eq!(fill.color_at(0.5), Rgb([200, 0, 0]));
        assert_eq!(fill.color_at(0.75), Rgb([0, 0, 150]));
        assert_eq!(fill.color_at(1.0), Rgb([0, 0, 100]));

        // A single stop, or every stop at one offset, is a solid fill.
        let flat = Fill::RadialGradient(vec![
            GradientStop {
                offset: 0.3,
                color: Rgb([9, 9, 9]),
            },
            GradientStop {
                offset: 0.3,
                color: Rgb([1, 1, 1]),
            },
        ]);
        assert_eq!(flat.color_at(0.3), Rgb([9, 9, 9]));
        assert_eq!(flat.color_at(0.8), Rgb([1, 1, 1]));
    }

    #[test]
    fn test_solid_fill_is_constant() {
        let fill = Fill::Solid(Rgb([1, 2, 3]));
        assert_eq!(fill.color_at(0.0), Rgb([1, 2, 3]));
        assert_eq!(fill.color_at(0.9), Rgb([1, 2, 3]));
    }

    #[test]
    fn test_circle_has_equal_radii() {
        let command = DrawCommand::circle(Vector2::new(1.0, 2.0), 3.0, Fill::Solid(Rgb([0, 0, 0])), None);
        match command {
            DrawCommand::Ellipse { radii, .. } => assert_eq!(radii, Vector2::new(3.0, 3.0)),
            _ => panic!("expected an ellipse"),
        }
    }
}
