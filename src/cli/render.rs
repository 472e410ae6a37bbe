use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::{
    draw_command::ImageAsset,
    file_io::{serialize_to_json_or_panic, write_image_to_file_or_panic, FilePrefix},
    raster_surface::RasterSurface,
    stopwatch::Stopwatch,
};
use crate::fern::{params::FernSceneParams, scene::render_scene};

/**
 * Loads a sprite from disk, if one was requested. A sprite that cannot be read
 * is reported and skipped; the surface will draw its placeholder instead.
 */
pub fn load_sprite(surface: &mut RasterSurface, asset: ImageAsset, path: &Option<String>) {
    let path = match path {
        Some(path) => path,
        None => return,
    };
    match image::open(path) {
        Ok(sprite) => surface.insert_sprite(asset, sprite.to_rgba8()),
        Err(err) => println!(
            "WARN:  Unable to load {:?} sprite from `{}`: {}. Using a flat fill.",
            asset, path, err
        ),
    }
}

/**
 * Rasterizes the complete scene in memory, using `seed` for every random decision.
 */
pub fn rasterize_scene(params: &FernSceneParams, seed: u64) -> RasterSurface {
    let mut surface = RasterSurface::new(params.resolution);
    load_sprite(&mut surface, ImageAsset::Sun, &params.sun_image_path);
    load_sprite(&mut surface, ImageAsset::Grass, &params.grass_image_path);

    let mut rng = StdRng::seed_from_u64(seed);
    render_scene(&params.fern, &mut rng, &mut surface);
    surface
}

/**
 * Called by main: renders the scene and writes the image, the resolved
 * parameters (including the seed that was used), and a diagnostics file.
 */
pub fn render_fern_scene(
    params: &FernSceneParams,
    file_prefix: FilePrefix,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stopwatch = Stopwatch::new("Fern Scene Stopwatch".to_owned());

    let seed = params.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let resolved_params = FernSceneParams {
        seed: Some(seed),
        ..params.clone()
    };
    serialize_to_json_or_panic(file_prefix.full_path_with_suffix(".json"), &resolved_params);
    stopwatch.record_split("setup".to_owned());

    let surface = rasterize_scene(&resolved_params, seed);
    stopwatch.record_split("render_scene".to_owned());
    println!(
        "INFO:  Drew {} commands ({} segments) with seed {}",
        surface.counts.total(),
        surface.counts.segment,
        seed
    );

    write_image_to_file_or_panic(file_prefix.full_path_with_suffix(".png"), |f| {
        surface.imgbuf.save(f)
    });
    stopwatch.record_split("write_png".to_owned());

    let mut diagnostics_file = file_prefix.create_file_with_suffix("_diagnostics.txt");
    stopwatch.display(&mut diagnostics_file)?;
    surface.counts.display(&mut diagnostics_file)?;

    Ok(())
}
