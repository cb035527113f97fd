use crate::calibration::CalibrationState;
use crate::classify::SizeBin;
use crate::config::Config;
use crate::measure::{self, MeasurementSample};
use crate::pose::FrameLandmarks;
use crate::session::{MeasurementSession, SessionOutcome, SessionState};

/// Running中のライブ表示用スナップショット
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub remaining_seconds: u32,
    /// 直近フレームで4点すべて検出できたか
    pub is_detecting: bool,
    pub live_shoulder_cm: Option<f32>,
    pub live_hip_cm: Option<f32>,
}

/// 計測エンジンのファサード
///
/// UI層に公開する面はここに集約する。2つの外部ドライバ
/// （姿勢検出コンポーネントのフレームコールバックと1秒タイマー）から
/// on_frame / on_timer_tick を呼び出す。両者は同一の協調イベントループ上で
/// 直列に実行される前提（ハンドラ実行中の割り込みなし）。
///
/// CalibrationState はセッションをまたぐ唯一の共有状態で、書き手は
/// adjust_calibration のみ。調整は以降のフレーム換算にだけ効き、
/// 収集済みサンプルを遡って補正することはない。
pub struct SizeEngine {
    calibration: CalibrationState,
    session: MeasurementSession,
    size_chart: Vec<SizeBin>,
    last_frame_detected: bool,
}

impl SizeEngine {
    pub fn new(calibration: CalibrationState, session: MeasurementSession, size_chart: Vec<SizeBin>) -> Self {
        Self {
            calibration,
            session,
            size_chart,
            last_frame_detected: false,
        }
    }

    /// 設定から作成
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CalibrationState::from_config(&config.calibration),
            MeasurementSession::from_config(&config.session),
            config.size_chart.clone(),
        )
    }

    /// 計測セッションを開始する（Running中はfalse）
    pub fn start_session(&mut self) -> bool {
        self.last_frame_detected = false;
        self.session.start()
    }

    /// キャリブレーション係数を調整し、クランプ後の値を返す
    ///
    /// セッション実行中でも呼び出せる。
    pub fn adjust_calibration(&mut self, delta: f32) -> f32 {
        self.calibration.adjust(delta)
    }

    pub fn pixels_per_cm(&self) -> f32 {
        self.calibration.pixels_per_cm()
    }

    /// フレームコールバック
    ///
    /// ランドマークから計測サンプルを抽出し、Running中ならセッションに追加する。
    /// 抽出結果をそのまま返すのでUIのライブ表示に使える。
    /// 4点が揃わないフレームは未検出として読み飛ばす（次フレームが再試行になる）。
    pub fn on_frame(
        &mut self,
        frame: &FrameLandmarks,
        frame_width: f32,
        frame_height: f32,
    ) -> Option<MeasurementSample> {
        let sample = measure::extract(frame, frame_width, frame_height, &self.calibration);
        self.last_frame_detected = sample.is_some();
        if let Some(sample) = sample {
            self.session.push_sample(sample);
        }
        sample
    }

    /// 1秒タイマーのコールバック
    pub fn on_timer_tick(&mut self) -> SessionState {
        self.session.tick(&self.size_chart)
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// 完了セッションの結果
    pub fn result(&self) -> Option<&SessionOutcome> {
        self.session.result()
    }

    /// ライブ表示用スナップショット
    pub fn snapshot(&self) -> SessionSnapshot {
        let live = self.session.live_sample();
        SessionSnapshot {
            state: self.session.state(),
            remaining_seconds: self.session.remaining_seconds(),
            is_detecting: self.last_frame_detected,
            live_shoulder_cm: live.map(|s| s.shoulder_cm),
            live_hip_cm: live.map(|s| s.hip_cm),
        }
    }
}

impl Default for SizeEngine {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
