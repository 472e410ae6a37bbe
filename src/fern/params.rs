use serde::{Deserialize, Serialize};

use super::fractal_fern::FernParams;

/**
 * Complete set of parameters that are fed in from the JSON for a fern scene.
 * Sprite paths are optional; the surface paints a flat placeholder for any
 * sprite that is missing.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FernSceneParams {
    pub resolution: [u32; 2],
    pub fern: FernParams,
    /// Drawn from the thread RNG when absent, then written back out with the render.
    pub seed: Option<u64>,
    pub sun_image_path: Option<String>,
    pub grass_image_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_may_be_omitted() {
        let params: FernSceneParams = serde_json::from_str(
            r#"{
                "resolution": [800, 600],
                "fern": { "size": 40.0, "redux": 1.8, "turn_bias": 0.5 }
            }"#,
        )
        .unwrap();
        assert_eq!(params.resolution, [800, 600]);
        assert_eq!(params.fern.redux, 1.8);
        assert!(params.seed.is_none());
        assert!(params.sun_image_path.is_none());
        assert!(params.grass_image_path.is_none());
    }

    #[test]
    fn test_seed_round_trips_through_json() {
        let params = FernSceneParams {
            resolution: [320, 480],
            fern: FernParams {
                size: 25.0,
                redux: 2.0,
                turn_bias: 0.4,
            },
            seed: Some(12345),
            sun_image_path: Some("data/sun.png".to_owned()),
            grass_image_path: None,
        };
        let text = serde_json::to_string(&params).unwrap();
        let parsed: FernSceneParams = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, params);
    }
}
