//! Fixed render context shared by every texture.

use crate::error::{AudioError, AudioResult};
use crate::resample::decimation_factor;
use crate::rng::BASE_SEED;

/// Loop length in seconds.
pub const DURATION_SECONDS: u32 = 8;
/// Sample rate of the master tier.
pub const MASTER_RATE: u32 = 44100;
/// Sample rate of the app tier.
pub const APP_RATE: u32 = 22050;

/// Output sample-rate tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateTier {
    /// Full-rate masters.
    Master,
    /// Reduced-rate copies shipped with the app.
    App,
}

impl RateTier {
    /// Both tiers, master first.
    pub const ALL: [RateTier; 2] = [RateTier::Master, RateTier::App];

    /// Directory name for this tier under the output root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            RateTier::Master => "master",
            RateTier::App => "app",
        }
    }
}

/// Duration, rates and seed used for a catalog render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Loop length in seconds.
    pub duration_seconds: u32,
    /// Master sample rate in Hz.
    pub master_rate: u32,
    /// App sample rate in Hz.
    pub app_rate: u32,
    /// Seed every texture's RNG is derived from.
    pub base_seed: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            duration_seconds: DURATION_SECONDS,
            master_rate: MASTER_RATE,
            app_rate: APP_RATE,
            base_seed: BASE_SEED,
        }
    }
}

impl RenderSettings {
    /// Checks that both rates are usable.
    pub fn validate(&self) -> AudioResult<()> {
        if self.master_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.master_rate,
            });
        }
        if self.app_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.app_rate,
            });
        }
        if self.app_rate > self.master_rate {
            return Err(AudioError::invalid_param(
                "app_rate",
                format!(
                    "{} Hz exceeds the master rate of {} Hz",
                    self.app_rate, self.master_rate
                ),
            ));
        }
        Ok(())
    }

    /// Number of samples in a master-tier loop.
    pub fn master_num_samples(&self) -> usize {
        self.duration_seconds as usize * self.master_rate as usize
    }

    /// Number of samples in an app-tier loop after decimation.
    pub fn app_num_samples(&self) -> usize {
        self.master_num_samples().div_ceil(self.decimation_factor())
    }

    /// Stride used to derive the app tier from the master tier.
    pub fn decimation_factor(&self) -> usize {
        decimation_factor(self.master_rate, self.app_rate)
    }

    /// Sample rate of a tier.
    pub fn sample_rate(&self, tier: RateTier) -> u32 {
        match tier {
            RateTier::Master => self.master_rate,
            RateTier::App => self.app_rate,
        }
    }

    /// Number of samples written for a tier.
    pub fn num_samples(&self, tier: RateTier) -> usize {
        match tier {
            RateTier::Master => self.master_num_samples(),
            RateTier::App => self.app_num_samples(),
        }
    }
}
