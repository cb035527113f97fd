use serde::{Deserialize, Serialize};

/// サイズ区分
///
/// 肩幅レンジと腰幅レンジを持つラベル付きビン。
/// テーブルは設定で差し替え可能な外部データとして扱う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeBin {
    pub label: String,
    /// 肩幅レンジ [min, max] (cm)
    pub shoulder_range: [f32; 2],
    /// 腰幅レンジ [min, max] (cm)
    pub hip_range: [f32; 2],
}

impl SizeBin {
    pub fn new(label: &str, shoulder_range: [f32; 2], hip_range: [f32; 2]) -> Self {
        Self {
            label: label.to_string(),
            shoulder_range,
            hip_range,
        }
    }

    /// レンジ中点とのL1距離スコア
    fn score(&self, shoulder_cm: f32, hip_cm: f32) -> f32 {
        let shoulder_mid = (self.shoulder_range[0] + self.shoulder_range[1]) / 2.0;
        let hip_mid = (self.hip_range[0] + self.hip_range[1]) / 2.0;
        (shoulder_cm - shoulder_mid).abs() + (hip_cm - hip_mid).abs()
    }
}

/// 最近傍マッチでサイズ区分を選択する
///
/// 各ビンのレンジ中点とのL1距離をスコアとし、最小のビンを返す。
/// スコアが同点の場合はテーブル宣言順で先のビンが勝つ（安定選択）。
/// テーブルが空の場合のみNone。NaN入力は契約外（上流のaggregateが遮断する）。
pub fn classify<'a>(shoulder_cm: f32, hip_cm: f32, bins: &'a [SizeBin]) -> Option<&'a SizeBin> {
    let mut best: Option<(&SizeBin, f32)> = None;
    for bin in bins {
        let score = bin.score(shoulder_cm, hip_cm);
        match best {
            // 厳密な < 比較により同点は先のビンを維持する
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((bin, score)),
        }
    }
    best.map(|(bin, _)| bin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_size_chart;

    #[test]
    fn test_exact_midpoint_match() {
        // S = shoulder [40,43], hip [85,92] → 中点 (41.5, 88.5) でスコア0
        let chart = default_size_chart();
        let bin = classify(41.5, 88.5, &chart).unwrap();
        assert_eq!(bin.label, "S");
    }

    #[test]
    fn test_empty_table() {
        assert!(classify(40.0, 90.0, &[]).is_none());
    }

    #[test]
    fn test_tie_prefers_first_declared() {
        // 同一レンジのビンが並ぶ場合、宣言順で先が選ばれる
        let bins = vec![
            SizeBin::new("A", [40.0, 44.0], [80.0, 90.0]),
            SizeBin::new("B", [40.0, 44.0], [80.0, 90.0]),
        ];
        let bin = classify(42.0, 85.0, &bins).unwrap();
        assert_eq!(bin.label, "A");
    }

    #[test]
    fn test_nearest_wins_outside_all_ranges() {
        // レンジ外の入力でも最近傍のビンに必ず割り当てられる
        let chart = default_size_chart();
        let bin = classify(500.0, 500.0, &chart).unwrap();
        assert!(!bin.label.is_empty());
    }

    #[test]
    fn test_single_axis_dominates() {
        let bins = vec![
            SizeBin::new("narrow", [30.0, 34.0], [80.0, 84.0]),
            SizeBin::new("wide", [46.0, 50.0], [80.0, 84.0]),
        ];
        assert_eq!(classify(31.0, 82.0, &bins).unwrap().label, "narrow");
        assert_eq!(classify(49.0, 82.0, &bins).unwrap().label, "wide");
    }
}
