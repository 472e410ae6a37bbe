#[path = "../common/mod.rs"]
mod common;

/// ```sh
/// cargo run --example render-fern
/// ```
pub fn main() {
    common::render_demo_from_string("render-fern")
}
