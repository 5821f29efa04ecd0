use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_points_file")]
    pub points_file: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            points_file: default_points_file(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Candidate count below which the verifier scans sequentially even when
    /// `parallel` is set.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
    #[serde(default = "default_verify_result")]
    pub verify_result: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
            verify_result: default_verify_result(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub visualization: Option<String>,
    #[serde(default = "default_image_dimension")]
    pub image_width: u32,
    #[serde(default = "default_image_dimension")]
    pub image_height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            visualization: None,
            image_width: default_image_dimension(),
            image_height: default_image_dimension(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_max_width")]
    pub max_width: i64,
    #[serde(default = "default_max_height")]
    pub max_height: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            max_width: default_max_width(),
            max_height: default_max_height(),
            seed: None,
        }
    }
}

fn default_points_file() -> String {
    "inputs/points.txt".to_string()
}

fn default_parallel() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    4096
}

fn default_verify_result() -> bool {
    true
}

fn default_image_dimension() -> u32 {
    1000
}

fn default_columns() -> usize {
    40
}

fn default_max_width() -> i64 {
    20
}

fn default_max_height() -> i64 {
    50
}
