use crate::calibration::CalibrationState;
use crate::pose::FrameLandmarks;

/// 1フレーム分の計測サンプル（cm単位）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementSample {
    /// 肩幅 (cm)
    pub shoulder_cm: f32,
    /// 腰幅 (cm)
    pub hip_cm: f32,
}

/// フレームのランドマークから肩幅・腰幅を計測する
///
/// 正規化座標をフレームサイズでピクセル座標に変換し、
/// 左右の肩・腰それぞれのユークリッド距離をキャリブレーション係数でcmに換算する。
/// 4点のうち1つでも未検出ならNone（未検出はエラーではなく、次のフレームが再試行になる）。
pub fn extract(
    frame: &FrameLandmarks,
    frame_width: f32,
    frame_height: f32,
    calibration: &CalibrationState,
) -> Option<MeasurementSample> {
    let left_shoulder = frame.left_shoulder?;
    let right_shoulder = frame.right_shoulder?;
    let left_hip = frame.left_hip?;
    let right_hip = frame.right_hip?;

    let shoulder_px = left_shoulder.pixel_distance(&right_shoulder, frame_width, frame_height);
    let hip_px = left_hip.pixel_distance(&right_hip, frame_width, frame_height);

    let ppcm = calibration.pixels_per_cm();
    Some(MeasurementSample {
        shoulder_cm: shoulder_px / ppcm,
        hip_cm: hip_px / ppcm,
    })
}
