use std::path::PathBuf;

use fractal_fern::{cli::render::render_fern_scene, core::file_io::FilePrefix};

pub fn build_output_path(project: &str) -> std::path::PathBuf {
    let directory_path: PathBuf = ["out", project].iter().collect();
    std::fs::create_dir_all(&directory_path).unwrap();
    directory_path
}

pub fn render_demo_from_string(demo_name: &str) {
    let params_name = String::from("demos/") + demo_name + &String::from("/params.json");

    let scene_params = serde_json::from_str(
        &std::fs::read_to_string(params_name).expect("Unable to read param file"),
    )
    .unwrap();

    render_fern_scene(
        &scene_params,
        FilePrefix {
            directory_path: build_output_path(demo_name),
            file_base: String::from("result"),
        },
    )
    .unwrap();
}
