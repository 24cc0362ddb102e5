use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use super::VoiceDetector;

/// Tuning for Silero voice-activity detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VadConfig {
    /// Speech probability threshold (0.0 to 1.0)
    pub activation_threshold: f32,

    /// Continuous silence required before a turn is considered finished
    pub min_silence_duration: Duration,

    /// Minimum speech length before the detector reports speech start
    pub min_speech_duration: Duration,

    /// Sample rate the detector expects, in Hz
    pub sample_rate: u32,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            activation_threshold: 0.5,                      // Balanced sensitivity
            min_silence_duration: Duration::from_millis(500), // 500ms silence = turn end
            min_speech_duration: Duration::from_millis(100), // 100ms to detect speech start
            sample_rate: 16000,
        }
    }
}

/// Silero VAD capability holder.
///
/// Detection itself runs inside the hosting media pipeline; this type pins
/// down the tuning the pipeline should run with.
pub struct SileroVad {
    config: VadConfig,
}

impl SileroVad {
    /// Validate tuning values and build the detector handle
    pub fn load(config: VadConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.activation_threshold) {
            bail!(
                "VAD activation threshold must be within 0.0..=1.0, got {}",
                config.activation_threshold
            );
        }
        if config.min_silence_duration.is_zero() {
            bail!("VAD minimum silence duration must be greater than zero");
        }
        if config.min_speech_duration.is_zero() {
            bail!("VAD minimum speech duration must be greater than zero");
        }
        if config.sample_rate != 8000 && config.sample_rate != 16000 {
            bail!(
                "Silero VAD supports 8000 Hz or 16000 Hz, got {}",
                config.sample_rate
            );
        }

        info!(
            "Loaded Silero VAD (threshold={}, min_silence={}ms, min_speech={}ms)",
            config.activation_threshold,
            config.min_silence_duration.as_millis(),
            config.min_speech_duration.as_millis()
        );

        Ok(Self { config })
    }
}

impl VoiceDetector for SileroVad {
    fn label(&self) -> &'static str {
        "silero"
    }

    fn config(&self) -> &VadConfig {
        &self.config
    }
}
