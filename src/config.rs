use std::fs;

use serde::Deserialize;

use crate::solver::{SearchParams, default_num_threads};
#[derive(Debug, Deserialize)]
pub struct Config {
    pub mix: f64,
    pub pool_capacity: usize,
    pub verbose: bool,
    #[serde(default)]
    pub num_threads: Option<usize>,
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

const fn default_progress_interval() -> u64 {
    6000
}

impl Config {
    pub fn load() -> Self {
        let config_str = fs::read_to_string("config.yaml").expect("无法读取 config.yaml");
        let config: Self = serde_yaml::from_str(&config_str).expect("解析 config.yaml 失败");
        assert!(
            (0.0..=1.0).contains(&config.mix),
            "mix 必须位于 [0, 1] 区间"
        );
        assert!(config.pool_capacity > 0, "pool_capacity 必须大于 0");
        assert!(config.progress_interval > 0, "progress_interval 必须大于 0");
        config
    }

    #[must_use]
    pub fn search_params(&self) -> SearchParams {
        SearchParams::new(
            self.mix,
            self.pool_capacity,
            self.num_threads.unwrap_or_else(default_num_threads),
        )
    }
}
