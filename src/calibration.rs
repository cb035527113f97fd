use crate::config::CalibrationConfig;

/// ピクセル/cm換算係数の下限
pub const PIXELS_PER_CM_MIN: f32 = 5.0;
/// ピクセル/cm換算係数の上限
pub const PIXELS_PER_CM_MAX: f32 = 15.0;
/// デフォルトの換算係数
pub const PIXELS_PER_CM_DEFAULT: f32 = 10.0;

/// ピクセル距離をcmに換算するキャリブレーション状態
///
/// セッションをまたいで保持される唯一の共有状態。
/// 値は常に [5, 15] にクランプされ、範囲外は一時的にも発生しない。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationState {
    pixels_per_cm: f32,
}

impl CalibrationState {
    /// 初期値を指定して作成（範囲外はクランプ）
    pub fn new(pixels_per_cm: f32) -> Self {
        Self {
            pixels_per_cm: pixels_per_cm.clamp(PIXELS_PER_CM_MIN, PIXELS_PER_CM_MAX),
        }
    }

    /// 設定から作成
    pub fn from_config(config: &CalibrationConfig) -> Self {
        Self::new(config.initial_pixels_per_cm)
    }

    /// 現在の換算係数
    pub fn pixels_per_cm(&self) -> f32 {
        self.pixels_per_cm
    }

    /// 換算係数をdeltaだけ調整する
    ///
    /// 境界を超える調整はエラーにせずクランプで吸収する。
    /// 境界上での繰り返し調整は冪等。
    pub fn adjust(&mut self, delta: f32) -> f32 {
        self.pixels_per_cm =
            (self.pixels_per_cm + delta).clamp(PIXELS_PER_CM_MIN, PIXELS_PER_CM_MAX);
        self.pixels_per_cm
    }
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self::new(PIXELS_PER_CM_DEFAULT)
    }
}
