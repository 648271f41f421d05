use serde::{Deserialize, Deserializer, Serialize};
use taqwim_types::CalendarError;

use crate::tabular::HijriEpoch;

/// Largest accepted sighting adjustment, in days, either direction.
pub const MAX_ADJUSTMENT: i64 = 30;
/// Bound enforced by [`CalendarConfigBuilder::strict_adjustment`].
pub const STRICT_ADJUSTMENT: i64 = 2;

/// Calendar configuration.
///
/// Deserializes from partial input: missing fields take their defaults, so
/// `{}` is the plain civil tabular calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Hijri day offset, positive = Hijri ahead. Clamped to [-30, 30].
    #[serde(deserialize_with = "deserialize_adjustment")]
    pub adjustment: i64,
    pub epoch: HijriEpoch,
}

impl CalendarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CalendarConfigBuilder {
        CalendarConfigBuilder::new()
    }

    pub fn adjustment(mut self, adjustment: i64) -> Self {
        self.adjustment = clamp_adjustment(adjustment);
        self
    }

    pub fn epoch(mut self, epoch: HijriEpoch) -> Self {
        self.epoch = epoch;
        self
    }

    /// Same configuration with the adjustment forced into range.
    pub(crate) fn normalized(self) -> Self {
        self.adjustment(self.adjustment)
    }
}

fn clamp_adjustment(adjustment: i64) -> i64 {
    let clamped = adjustment.clamp(-MAX_ADJUSTMENT, MAX_ADJUSTMENT);
    if clamped != adjustment {
        tracing::warn!(requested = adjustment, applied = clamped, "Hijri adjustment clamped");
    }
    clamped
}

fn deserialize_adjustment<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    i64::deserialize(deserializer).map(clamp_adjustment)
}

/// Builder with validation for `CalendarConfig`.
#[derive(Debug, Default)]
pub struct CalendarConfigBuilder {
    adjustment: Option<i64>,
    epoch: Option<HijriEpoch>,
    strict_adjustment: bool,
}

impl CalendarConfigBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn adjustment(mut self, adjustment: i64) -> Self { self.adjustment = Some(adjustment); self }
    pub fn epoch(mut self, epoch: HijriEpoch) -> Self { self.epoch = Some(epoch); self }

    /// Enables strict adjustment bounds [-2, 2].
    pub fn strict_adjustment(mut self, strict: bool) -> Self { self.strict_adjustment = strict; self }

    /// Builds and validates.
    pub fn build(self) -> Result<CalendarConfig, CalendarError> {
        let adjustment = self.adjustment.unwrap_or(0);

        if self.strict_adjustment && !(-STRICT_ADJUSTMENT..=STRICT_ADJUSTMENT).contains(&adjustment) {
            return Err(CalendarError::invalid_config(format!(
                "adjustment {} outside strict bounds [-{STRICT_ADJUSTMENT}, {STRICT_ADJUSTMENT}]",
                adjustment
            )));
        }

        let config = CalendarConfig {
            adjustment: clamp_adjustment(adjustment),
            epoch: self.epoch.unwrap_or_default(),
        };
        tracing::debug!(adjustment = config.adjustment, epoch = %config.epoch, "calendar configuration built");
        Ok(config)
    }
}
