use image::Rgb;
use nalgebra::Vector2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{draw_command::DrawCommand, surface::DrawingSurface};

use super::decorations::{berry, pentagon, BERRY_RADIUS};

pub const DELTA_THETA: f64 = 0.1;
pub const SEGMENTS_PER_BRANCH: usize = 30;
pub const SHRINK_PER_SEGMENT: f64 = 0.83;
/// Branches with a size budget at or below this value draw nothing.
pub const LEAF_SIZE: f64 = 1.0;
pub const BRANCH_ANGLE: f64 = std::f64::consts::FRAC_PI_3;
pub const FROND_COLOR: Rgb<u8> = Rgb([73, 187, 66]);
pub const BERRY_PROBABILITY: f64 = 0.015;
pub const PENTAGON_PROBABILITY: f64 = 0.003;

// Only reachable when `redux` is too small for children to shrink.
const MAX_BRANCH_DEPTH: usize = 1024;

/**
 * Parameters that shape the fern.
 *
 * `size` is the length of the first segment of the main frond. Each child
 * branch starts with `size / redux` (after the per-segment shrink), so
 * `redux > 1` is needed to keep the recursion finite in practice. This is not
 * checked.
 *
 * `turn_bias` is compared against a uniform sample on every segment: samples
 * above it turn the heading by `-DELTA_THETA`, all others by `+DELTA_THETA`.
 * Larger values therefore favor positive turns.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FernParams {
    pub size: f64,
    pub redux: f64,
    pub turn_bias: f64,
}

#[derive(Debug, Clone, Copy)]
struct BranchState {
    position: Vector2<f64>,
    size: f64,
    heading: f64, // radians
}

pub fn turn_delta(sample: f64, turn_bias: f64) -> f64 {
    if sample > turn_bias {
        -DELTA_THETA
    } else {
        DELTA_THETA
    }
}

/// Direction of travel for a heading. The negated cosine is what makes the fronds curl.
pub fn heading_direction(heading: f64) -> Vector2<f64> {
    Vector2::new(-heading.cos(), heading.sin())
}

pub fn segment_width(size: f64) -> f64 {
    1.0 + size / 15.0
}

/**
 * Draws a fern rooted at `root`, growing along `heading`. Every random decision
 * (turns, decoration placement, berry jitter) is drawn from `rng`, so a seeded
 * generator reproduces the exact same command sequence.
 */
pub fn generate_fern<R, S>(
    params: &FernParams,
    root: Vector2<f64>,
    heading: f64,
    rng: &mut R,
    surface: &mut S,
) where
    R: Rng,
    S: DrawingSurface + ?Sized,
{
    let branch = BranchState {
        position: root,
        size: params.size,
        heading,
    };
    grow_branch(params, branch, 0, rng, surface);
}

fn grow_branch<R, S>(
    params: &FernParams,
    branch: BranchState,
    depth: usize,
    rng: &mut R,
    surface: &mut S,
) where
    R: Rng,
    S: DrawingSurface + ?Sized,
{
    debug_assert!(
        depth < MAX_BRANCH_DEPTH,
        "fern recursion is not converging; is `redux` ({}) large enough?",
        params.redux
    );
    if branch.size <= LEAF_SIZE {
        return;
    }

    let BranchState {
        mut position,
        mut size,
        mut heading,
    } = branch;

    for _ in 0..SEGMENTS_PER_BRANCH {
        heading += turn_delta(rng.gen::<f64>(), params.turn_bias);
        let next_position = position + size * heading_direction(heading);

        surface.draw(DrawCommand::Segment {
            from: position,
            to: next_position,
            color: FROND_COLOR,
            width: segment_width(size),
        });
        size *= SHRINK_PER_SEGMENT;
        position = next_position;

        if rng.gen::<f64>() < BERRY_PROBABILITY {
            surface.draw(berry(&position, BERRY_RADIUS, rng));
        }
        if rng.gen::<f64>() < PENTAGON_PROBABILITY {
            surface.draw(pentagon(&position));
        }

        let child_size = size / params.redux;
        grow_branch(
            params,
            BranchState {
                position,
                size: child_size,
                heading: heading + BRANCH_ANGLE,
            },
            depth + 1,
            rng,
            surface,
        );
        grow_branch(
            params,
            BranchState {
                position,
                size: child_size,
                heading: heading - BRANCH_ANGLE,
            },
            depth + 1,
            rng,
            surface,
        );
    }
}
