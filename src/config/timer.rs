//! Timer duration settings.

use crate::config::{settings::SettingsError, store::ConfigStore};

/// Config section holding the timer durations.
pub const TIMER_SECTION: &str = "Timer";

/// Smallest duration accepted by the preference controls, in minutes.
pub const MIN_DURATION: i32 = 1;

/// Largest duration accepted by the preference controls, in minutes.
pub const MAX_DURATION: i32 = 99;

/// One of the three configurable timer durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationSetting {
    /// Length of a work session.
    Pomodoro,
    /// Length of a short break.
    ShortBreak,
    /// Length of a long break.
    LongBreak,
}

impl DurationSetting {
    /// All settings in display order.
    pub const ALL: [Self; 3] = [Self::Pomodoro, Self::ShortBreak, Self::LongBreak];

    /// Key under [`TIMER_SECTION`].
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Pomodoro => "pomodoro_duration",
            Self::ShortBreak => "shortbreak_duration",
            Self::LongBreak => "longbreak_duration",
        }
    }

    /// Row title shown in the preferences.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::ShortBreak => "Short break",
            Self::LongBreak => "Long break",
        }
    }

    /// Value used when the settings file has none.
    #[must_use]
    pub fn default_minutes(self) -> i32 {
        match self {
            Self::Pomodoro => 25,
            Self::ShortBreak => 5,
            Self::LongBreak => 15,
        }
    }
}

/// Snapshot of the three durations read from a config store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerDurations {
    pub pomodoro: i32,
    pub short_break: i32,
    pub long_break: i32,
}

impl TimerDurations {
    /// Reads all three durations.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if any value is missing or not an integer.
    pub fn load(config: &dyn ConfigStore) -> Result<Self, SettingsError> {
        Ok(Self {
            pomodoro: config.get_int(TIMER_SECTION, DurationSetting::Pomodoro.key())?,
            short_break: config.get_int(TIMER_SECTION, DurationSetting::ShortBreak.key())?,
            long_break: config.get_int(TIMER_SECTION, DurationSetting::LongBreak.key())?,
        })
    }

    /// Value for one setting.
    #[must_use]
    pub fn get(&self, setting: DurationSetting) -> i32 {
        match setting {
            DurationSetting::Pomodoro => self.pomodoro,
            DurationSetting::ShortBreak => self.short_break,
            DurationSetting::LongBreak => self.long_break,
        }
    }

    /// Writes one duration back to the store as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the store cannot be saved.
    pub fn store(
        config: &dyn ConfigStore,
        setting: DurationSetting,
        value: i32,
    ) -> Result<(), SettingsError> {
        config.set(TIMER_SECTION, setting.key(), value.to_string())
    }
}
