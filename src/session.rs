use crate::aggregate::aggregate;
use crate::classify::{classify, SizeBin};
use crate::config::SessionConfig;
use crate::measure::MeasurementSample;

/// デフォルトの計測ウィンドウ長（秒）
pub const DEFAULT_DURATION_SECS: u32 = 5;

/// セッションの状態
///
/// Completed から出る唯一の遷移は start() による再スタート。
/// 将来 Cancelled 終端状態を追加しても既存の3状態の契約は変わらない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Completed,
}

/// 完了セッションの結果
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// 推奨サイズと平均計測値
    Recommendation {
        size: String,
        shoulder_cm: f32,
        hip_cm: f32,
    },
    /// ウィンドウ中に有効サンプルが1つもなかった
    InsufficientData,
}

/// 時間制限付きの計測セッション
///
/// フレームごとのサンプル追加と1秒周期のタイマーtickの2つの遷移関数で駆動する
/// 状態機械。タイマーやフレームコールバックの所有は呼び出し側（UI層）の責務で、
/// 本体は同期メソッドのみを持つ。
///
/// 満了順序は決定的: remaining_seconds を0にするtickがreturnする前に
/// Completed へ遷移するため、その後に届いたサンプルは棄却される。
pub struct MeasurementSession {
    state: SessionState,
    duration_secs: u32,
    remaining_seconds: u32,
    samples: Vec<MeasurementSample>,
    result: Option<SessionOutcome>,
}

impl MeasurementSession {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            state: SessionState::Idle,
            duration_secs,
            remaining_seconds: 0,
            samples: Vec::new(),
            result: None,
        }
    }

    /// 設定から作成
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.duration_secs)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// 完了後の結果。Running/Idle中はNone
    pub fn result(&self) -> Option<&SessionOutcome> {
        self.result.as_ref()
    }

    /// 実行中の直近サンプル（ライブ表示用）
    pub fn live_sample(&self) -> Option<MeasurementSample> {
        match self.state {
            SessionState::Running => self.samples.last().copied(),
            _ => None,
        }
    }

    /// 計測を開始する
    ///
    /// Idle または Completed からのみ有効。サンプル・残り秒数・結果を
    /// リセットして Running に遷移する。Running 中の呼び出しは無視してfalse。
    pub fn start(&mut self) -> bool {
        match self.state {
            SessionState::Idle | SessionState::Completed => {
                self.samples.clear();
                self.remaining_seconds = self.duration_secs;
                self.result = None;
                self.state = SessionState::Running;
                true
            }
            SessionState::Running => false,
        }
    }

    /// フレーム計測値を追加する
    ///
    /// Running 中のみ有効。フレームレート次第で1秒に複数回呼ばれるが、
    /// 重複排除もレート制限もせず全件保持する。
    pub fn push_sample(&mut self, sample: MeasurementSample) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        self.samples.push(sample);
        true
    }

    /// 1秒タイマーのtick
    ///
    /// Running 中のみ残り秒数を減算する。0に達したtickで集約・分類を行い
    /// Completed に遷移する（以降のサンプルは棄却される）。
    pub fn tick(&mut self, chart: &[SizeBin]) -> SessionState {
        if self.state != SessionState::Running {
            return self.state;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.result = Some(self.finalize(chart));
            self.state = SessionState::Completed;
        }
        self.state
    }

    fn finalize(&self, chart: &[SizeBin]) -> SessionOutcome {
        let Some(mean) = aggregate(&self.samples) else {
            return SessionOutcome::InsufficientData;
        };
        match classify(mean.shoulder_cm, mean.hip_cm, chart) {
            Some(bin) => SessionOutcome::Recommendation {
                size: bin.label.clone(),
                shoulder_cm: mean.shoulder_cm,
                hip_cm: mean.hip_cm,
            },
            // サイズ表が空の場合のみ到達
            None => SessionOutcome::InsufficientData,
        }
    }
}

impl Default for MeasurementSession {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}
