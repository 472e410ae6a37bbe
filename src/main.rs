use clap::Parser;
use fractal_fern::cli::args::{CommandsEnum, FractalFernArgs};
use fractal_fern::cli::render::render_fern_scene;
use fractal_fern::core::file_io::{
    build_output_path_with_date_time, extract_base_name, maybe_date_time_string, FilePrefix,
};
use fractal_fern::fern::params::FernSceneParams;

fn main() {
    let args: FractalFernArgs = FractalFernArgs::parse();

    match &args.command {
        Some(CommandsEnum::Render(params)) => {
            let scene_params: FernSceneParams = serde_json::from_str(
                &std::fs::read_to_string(&params.params_path).expect("Unable to read param file"),
            )
            .expect("Unable to parse param file");

            let file_prefix = FilePrefix {
                directory_path: build_output_path_with_date_time(
                    &params.params_path,
                    "render",
                    &maybe_date_time_string(params.date_time_out),
                ),
                file_base: extract_base_name(&params.params_path).to_owned(),
            };

            render_fern_scene(&scene_params, file_prefix).unwrap();
        }
        None => {
            println!("Default command (nothing specified!)");
        }
    }
}
