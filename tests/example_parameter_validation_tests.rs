#[cfg(test)]
mod tests {
    use fractal_fern::fern::params::FernSceneParams;
    use glob::glob;
    use serde::de::DeserializeOwned;
    use std::any::type_name;
    use std::fs;
    use std::path::Path;

    fn parse_all_parameter_files_or_panic<T: DeserializeOwned>(directory: &str) -> Vec<T> {
        let pattern = format!("{}/**/*.json", directory);
        let mut parsed = Vec::new();

        // Use glob to find all matching .json files
        // For each match, ensure that we can (1) open the file and (2) parse it into the specified parameter type.
        for entry in glob(&pattern).expect("Failed to read glob pattern") {
            match entry {
                Ok(path) => {
                    let content = fs::read_to_string(&path)
                        .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));

                    let result: Result<T, _> = serde_json::from_str(&content);

                    match result {
                        Ok(params) => parsed.push(params),
                        Err(err) => {
                            panic!(
                                "Failed to parse JSON file: {:?} as parameter type: `{}`.\n\n{:?}\n",
                                path,
                                type_name::<T>(),
                                err
                            );
                        }
                    }
                }
                Err(e) => panic!("Failed to read path: {:?}. Check permissions.", e),
            }
        }
        parsed
    }

    #[test]
    fn test_ensure_all_demo_files_can_be_parsed() {
        let all_params = parse_all_parameter_files_or_panic::<FernSceneParams>("demos");
        assert!(!all_params.is_empty());

        for params in all_params.iter() {
            // Recursion only shrinks when redux is large enough.
            assert!(params.fern.redux > 1.0);
            assert!(params.fern.size > 0.0);
            assert!((0.0..=1.0).contains(&params.fern.turn_bias));
            // Leaves room for the ovals between the pot and the bottom edge.
            assert!(params.resolution[1] >= 450);
            // Sprite paths are optional, but any that are given must resolve.
            for path in [&params.sun_image_path, &params.grass_image_path].iter() {
                if let Some(path) = path {
                    assert!(Path::new(path).is_file(), "missing sprite: {}", path);
                }
            }
        }
    }
}
