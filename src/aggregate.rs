use crate::measure::MeasurementSample;

/// セッション内サンプルの集約結果（cm単位の平均値）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateMeasurement {
    pub shoulder_cm: f32,
    pub hip_cm: f32,
}

/// サンプル列を肩幅・腰幅それぞれの算術平均に縮約する
///
/// サンプルが空の場合はNone（データ不足）。ゼロ除算は発生しない。
pub fn aggregate(samples: &[MeasurementSample]) -> Option<AggregateMeasurement> {
    if samples.is_empty() {
        return None;
    }

    let n = samples.len() as f32;
    let shoulder_sum: f32 = samples.iter().map(|s| s.shoulder_cm).sum();
    let hip_sum: f32 = samples.iter().map(|s| s.hip_cm).sum();

    Some(AggregateMeasurement {
        shoulder_cm: shoulder_sum / n,
        hip_cm: hip_sum / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(shoulder_cm: f32, hip_cm: f32) -> MeasurementSample {
        MeasurementSample { shoulder_cm, hip_cm }
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn test_aggregate_single() {
        let result = aggregate(&[sample(40.0, 90.0)]).unwrap();
        assert_eq!(result.shoulder_cm, 40.0);
        assert_eq!(result.hip_cm, 90.0);
    }

    #[test]
    fn test_aggregate_mean() {
        let result = aggregate(&[sample(10.0, 20.0), sample(12.0, 22.0)]).unwrap();
        assert!((result.shoulder_cm - 11.0).abs() < 1e-5);
        assert!((result.hip_cm - 21.0).abs() < 1e-5);
    }

    #[test]
    fn test_aggregate_independent_axes() {
        // 肩と腰は独立に平均される
        let result = aggregate(&[sample(30.0, 100.0), sample(50.0, 80.0), sample(40.0, 90.0)]).unwrap();
        assert!((result.shoulder_cm - 40.0).abs() < 1e-5);
        assert!((result.hip_cm - 90.0).abs() < 1e-5);
    }
}
