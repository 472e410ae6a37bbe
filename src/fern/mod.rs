pub mod decorations;
pub mod fractal_fern;
pub mod params;
pub mod scene;
