#[path = "../common/mod.rs"]
mod common;

/// Low turn bias, so the fronds mostly curl the same way.
/// ```sh
/// cargo run --example render-fern-windswept
/// ```
pub fn main() {
    common::render_demo_from_string("render-fern-windswept")
}
