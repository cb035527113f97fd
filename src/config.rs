use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::classify::SizeBin;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub session: SessionConfig,
    /// サイズ表（省略時は組み込みの7区分）
    #[serde(default = "default_size_chart")]
    pub size_chart: Vec<SizeBin>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalibrationConfig {
    /// 初期のピクセル/cm換算係数
    #[serde(default = "default_initial_pixels_per_cm")]
    pub initial_pixels_per_cm: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// 計測ウィンドウ長（秒）
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u32,
}

fn default_initial_pixels_per_cm() -> f32 { 10.0 }
fn default_duration_secs() -> u32 { 5 }

/// 組み込みのサイズ表
///
/// 元データをそのまま保持している。LとXLのレンジは他の区分より
/// 不自然に小さいが、意図が復元できないため値も並び順も修正しない。
pub fn default_size_chart() -> Vec<SizeBin> {
    vec![
        SizeBin::new("XXS", [34.0, 37.0], [75.0, 80.0]),
        SizeBin::new("XS", [37.0, 40.0], [80.0, 85.0]),
        SizeBin::new("S", [40.0, 43.0], [85.0, 92.0]),
        SizeBin::new("M", [43.0, 46.0], [92.0, 98.0]),
        SizeBin::new("L", [22.0, 26.0], [47.0, 52.0]),
        SizeBin::new("XL", [26.0, 30.0], [52.0, 58.0]),
        SizeBin::new("XXL", [46.0, 50.0], [98.0, 110.0]),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calibration: CalibrationConfig::default(),
            session: SessionConfig::default(),
            size_chart: default_size_chart(),
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            initial_pixels_per_cm: default_initial_pixels_per_cm(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// 読み込みに失敗した場合はデフォルト設定を返す
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
