/// 正規化された2Dランドマーク座標 (0.0〜1.0)
///
/// 外部の姿勢検出コンポーネントがフレームごとに出力する。
/// フレームの幅・高さを掛けることでピクセル座標になる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPoint {
    /// 正規化されたX座標 (0.0〜1.0)
    pub x: f32,
    /// 正規化されたY座標 (0.0〜1.0)
    pub y: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// ピクセル座標に変換
    pub fn to_pixel(&self, frame_width: f32, frame_height: f32) -> (f32, f32) {
        (self.x * frame_width, self.y * frame_height)
    }

    /// ピクセル空間でのユークリッド距離
    pub fn pixel_distance(&self, other: &LandmarkPoint, frame_width: f32, frame_height: f32) -> f32 {
        let (ax, ay) = self.to_pixel(frame_width, frame_height);
        let (bx, by) = other.to_pixel(frame_width, frame_height);
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    }
}

/// 1フレーム分の体幹ランドマーク
///
/// 検出器がランドマークを見つけられなかった場合はNone。
/// 4点すべてが揃ったフレームのみ計測に使われる。
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameLandmarks {
    pub left_shoulder: Option<LandmarkPoint>,
    pub right_shoulder: Option<LandmarkPoint>,
    pub left_hip: Option<LandmarkPoint>,
    pub right_hip: Option<LandmarkPoint>,
}

impl FrameLandmarks {
    /// 4点すべて検出済みか
    pub fn is_complete(&self) -> bool {
        self.left_shoulder.is_some()
            && self.right_shoulder.is_some()
            && self.left_hip.is_some()
            && self.right_hip.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixel() {
        let p = LandmarkPoint::new(0.5, 0.25);
        let (px, py) = p.to_pixel(640.0, 480.0);
        assert_eq!(px, 320.0);
        assert_eq!(py, 120.0);
    }

    #[test]
    fn test_pixel_distance_horizontal() {
        let a = LandmarkPoint::new(0.2, 0.3);
        let b = LandmarkPoint::new(0.5, 0.3);
        let d = a.pixel_distance(&b, 1000.0, 1000.0);
        assert!((d - 300.0).abs() < 1e-4);
    }

    #[test]
    fn test_pixel_distance_diagonal() {
        let a = LandmarkPoint::new(0.0, 0.0);
        let b = LandmarkPoint::new(0.3, 0.4);
        // 3-4-5 triangle on a 100x100 frame
        let d = a.pixel_distance(&b, 100.0, 100.0);
        assert!((d - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_is_complete() {
        let p = LandmarkPoint::new(0.5, 0.5);
        let mut frame = FrameLandmarks::default();
        assert!(!frame.is_complete());

        frame.left_shoulder = Some(p);
        frame.right_shoulder = Some(p);
        frame.left_hip = Some(p);
        assert!(!frame.is_complete());

        frame.right_hip = Some(p);
        assert!(frame.is_complete());
    }
}
