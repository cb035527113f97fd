use anyhow::Result;
use std::io::{self, Write};

use sizefit::config::Config;
use sizefit::engine::SizeEngine;
use sizefit::pose::{FrameLandmarks, LandmarkPoint};
use sizefit::session::{SessionOutcome, SessionState};

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);
    let mut engine = SizeEngine::from_config(&config);

    println!("=== SizeFit - Engine Test Console ===");
    println!();
    println!("コマンド:");
    println!("  s                      - セッション開始");
    println!("  c delta                - キャリブレーション調整 (例: c 0.5)");
    println!("  f lsx lsy rsx rsy lhx lhy rhx rhy");
    println!("                         - フレーム入力 (正規化座標, 1000x1000想定)");
    println!("  n                      - 未検出フレーム入力");
    println!("  t                      - タイマーtick (1秒経過)");
    println!("  v                      - スナップショット表示");
    println!("  q                      - 終了");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let parts: Vec<&str> = input.trim().split_whitespace().collect();

        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "s" => {
                if engine.start_session() {
                    println!("[session] 開始 (残り {}秒)", engine.snapshot().remaining_seconds);
                } else {
                    println!("[session] 実行中のため開始できません");
                }
            }
            "c" if parts.len() == 2 => {
                let delta: f32 = parts[1].parse()?;
                let value = engine.adjust_calibration(delta);
                println!("[calib] pixels_per_cm = {}", value);
            }
            "f" if parts.len() == 9 => {
                let v = parts[1..]
                    .iter()
                    .map(|s| s.parse::<f32>())
                    .collect::<Result<Vec<_>, _>>()?;
                let frame = FrameLandmarks {
                    left_shoulder: Some(LandmarkPoint::new(v[0], v[1])),
                    right_shoulder: Some(LandmarkPoint::new(v[2], v[3])),
                    left_hip: Some(LandmarkPoint::new(v[4], v[5])),
                    right_hip: Some(LandmarkPoint::new(v[6], v[7])),
                };
                match engine.on_frame(&frame, 1000.0, 1000.0) {
                    Some(sample) => println!(
                        "[frame] 肩幅 {:.1}cm / 腰幅 {:.1}cm",
                        sample.shoulder_cm, sample.hip_cm
                    ),
                    None => println!("[frame] 未検出"),
                }
            }
            "n" => {
                engine.on_frame(&FrameLandmarks::default(), 1000.0, 1000.0);
                println!("[frame] 未検出");
            }
            "t" => match engine.on_timer_tick() {
                SessionState::Completed => {
                    println!("[session] 完了");
                    match engine.result() {
                        Some(SessionOutcome::Recommendation { size, shoulder_cm, hip_cm }) => {
                            println!(
                                "  推奨サイズ: {} (肩幅 {:.1}cm / 腰幅 {:.1}cm)",
                                size, shoulder_cm, hip_cm
                            );
                        }
                        Some(SessionOutcome::InsufficientData) => {
                            println!("  データ不足: 有効なサンプルがありません");
                        }
                        None => {}
                    }
                }
                state => println!(
                    "[session] {:?} (残り {}秒)",
                    state,
                    engine.snapshot().remaining_seconds
                ),
            },
            "v" => {
                let snap = engine.snapshot();
                println!("状態: {:?}", snap.state);
                println!("残り: {}秒", snap.remaining_seconds);
                println!("検出中: {}", snap.is_detecting);
                match (snap.live_shoulder_cm, snap.live_hip_cm) {
                    (Some(s), Some(h)) => println!("ライブ値: 肩幅 {:.1}cm / 腰幅 {:.1}cm", s, h),
                    _ => println!("ライブ値: なし"),
                }
            }
            "q" => {
                println!("終了します");
                break;
            }
            _ => {
                println!("不明なコマンド: {}", parts[0]);
            }
        }
    }

    Ok(())
}
