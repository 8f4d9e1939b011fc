use std::sync::atomic::{AtomicU32, Ordering};

/// Options of the range query entry points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Config {
    /// Longest span, in days counting both ends, `between` accepts. `0` disables the limit.
    pub max_between_days: u32,
}

/// Partial [`Config`]; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ConfigUpdate {
    pub max_between_days: Option<u32>,
}

impl ConfigUpdate {
    pub const fn max_between_days(value: u32) -> Self {
        ConfigUpdate {
            max_between_days: Some(value),
        }
    }
}

impl Config {
    pub const fn new(max_between_days: u32) -> Self {
        Config { max_between_days }
    }

    pub fn merge(self, update: ConfigUpdate) -> Self {
        Config {
            max_between_days: update.max_between_days.unwrap_or(self.max_between_days),
        }
    }

    /// Checks an inclusive span of `days` against the configured maximum.
    pub(crate) fn check_span(&self, days: u64) -> crate::Result<()> {
        let limit = self.max_between_days;
        if limit > 0 && days > u64::from(limit) {
            tracing::debug!(limit, requested = days, "range limit exceeded");
            return Err(crate::Error::RangeLimitExceeded {
                limit,
                requested: days,
            });
        }
        Ok(())
    }
}

impl From<ConfigUpdate> for Config {
    fn from(value: ConfigUpdate) -> Self {
        Config::default().merge(value)
    }
}

static MAX_BETWEEN_DAYS: AtomicU32 = AtomicU32::new(0);

pub(crate) fn current() -> Config {
    Config {
        max_between_days: MAX_BETWEEN_DAYS.load(Ordering::Relaxed),
    }
}

pub(crate) fn configure(update: ConfigUpdate) {
    if let Some(value) = update.max_between_days {
        MAX_BETWEEN_DAYS.store(value, Ordering::Relaxed);
    }
    tracing::debug!(config = ?current(), "configuration updated");
}

pub(crate) fn reset() {
    MAX_BETWEEN_DAYS.store(Config::default().max_between_days, Ordering::Relaxed);
    tracing::debug!("configuration reset");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_unset_fields() {
        let config = Config::new(30);
        assert_eq!(config.merge(ConfigUpdate::default()), config);
        assert_eq!(config.merge(ConfigUpdate::max_between_days(0)), Config::default());
        assert_eq!(Config::from(ConfigUpdate::max_between_days(7)), Config::new(7));
    }

    #[test]
    fn zero_disables_span_check() {
        assert!(Config::default().check_span(u64::MAX).is_ok());
    }

    #[test]
    fn span_check_counts_both_ends() {
        let config = Config::new(30);
        assert!(config.check_span(30).is_ok());
        assert_eq!(
            config.check_span(31),
            Err(crate::Error::RangeLimitExceeded {
                limit: 30,
                requested: 31
            })
        );
    }
}
