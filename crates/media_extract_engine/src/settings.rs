use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorSettings {
    /// Lower bound (inclusive) of the simulated extraction latency.
    pub min_latency: Duration,
    /// Upper bound (exclusive) of the simulated extraction latency.
    pub max_latency: Duration,
    pub download_latency: Duration,
    pub glitch_period: Duration,
    pub glitch_pulse: Duration,
    /// Base of the placeholder image service; seed and size are appended.
    pub thumbnail_endpoint: String,
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            min_latency: Duration::from_millis(1500),
            max_latency: Duration::from_millis(2500),
            download_latency: Duration::from_millis(1500),
            glitch_period: Duration::from_secs(5),
            glitch_pulse: Duration::from_millis(200),
            thumbnail_endpoint: "https://picsum.photos/seed".to_string(),
            thumbnail_width: 400,
            thumbnail_height: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("latency range is empty: min {min:?} exceeds max {max:?}")]
    InvalidLatencyRange { min: Duration, max: Duration },
    #[error("glitch period must be non-zero")]
    ZeroGlitchPeriod,
    #[error("glitch pulse {pulse:?} must be shorter than the period {period:?}")]
    GlitchPulseTooLong { pulse: Duration, period: Duration },
}

impl ExtractorSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_latency > self.max_latency {
            return Err(SettingsError::InvalidLatencyRange {
                min: self.min_latency,
                max: self.max_latency,
            });
        }
        if self.glitch_period.is_zero() {
            return Err(SettingsError::ZeroGlitchPeriod);
        }
        if self.glitch_pulse >= self.glitch_period {
            return Err(SettingsError::GlitchPulseTooLong {
                pulse: self.glitch_pulse,
                period: self.glitch_period,
            });
        }
        Ok(())
    }

    /// Map a unit sample in `[0, 1)` onto the latency range.
    pub fn latency_for(&self, unit: f64) -> Duration {
        let span = self.max_latency.saturating_sub(self.min_latency);
        let unit = if unit.is_finite() {
            unit.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let offset = span.mul_f64(unit);
        // Keep the upper bound exclusive even for a sample of exactly 1.0.
        if !span.is_zero() && offset >= span {
            return self.max_latency - Duration::from_nanos(1);
        }
        self.min_latency + offset
    }

    pub fn thumbnail_url(&self, seed: i64) -> String {
        format!(
            "{}/{}/{}/{}",
            self.thumbnail_endpoint.trim_end_matches('/'),
            seed,
            self.thumbnail_width,
            self.thumbnail_height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ExtractorSettings::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_latency_range() {
        let settings = ExtractorSettings {
            min_latency: Duration::from_millis(10),
            max_latency: Duration::from_millis(5),
            ..ExtractorSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidLatencyRange { .. })
        ));
    }

    #[test]
    fn rejects_pulse_longer_than_period() {
        let settings = ExtractorSettings {
            glitch_period: Duration::from_millis(100),
            glitch_pulse: Duration::from_millis(100),
            ..ExtractorSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::GlitchPulseTooLong { .. })
        ));
    }

    #[test]
    fn latency_spans_half_open_range() {
        let settings = ExtractorSettings::default();
        assert_eq!(settings.latency_for(0.0), Duration::from_millis(1500));
        assert_eq!(settings.latency_for(0.5), Duration::from_millis(2000));
        assert!(settings.latency_for(1.0) < Duration::from_millis(2500));
        assert!(settings.latency_for(0.999_999) < Duration::from_millis(2500));
    }

    #[test]
    fn thumbnail_url_appends_seed_and_size() {
        let settings = ExtractorSettings {
            thumbnail_endpoint: "https://img.example/seed/".to_string(),
            ..ExtractorSettings::default()
        };
        assert_eq!(
            settings.thumbnail_url(1_700_000_000_001),
            "https://img.example/seed/1700000000001/400/300"
        );
    }
}
