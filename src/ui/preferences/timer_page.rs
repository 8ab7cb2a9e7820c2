//! Timer preferences page.
//!
//! Shows one spin row per timer duration. Every value change is written to
//! the config store straight away.

use std::{collections::HashMap, sync::Arc};

use {
    anyhow::Error,
    libadwaita::{
        PreferencesGroup, PreferencesPage, SpinRow,
        gtk::{AccessibleRole::Group, Adjustment},
        prelude::{PreferencesGroupExt, PreferencesPageExt},
    },
    tracing::debug,
};

use crate::{
    config::{ConfigStore, DurationSetting, MAX_DURATION, MIN_DURATION, TimerDurations},
    error::{ErrorReporter, PreferencesError},
};

/// Preferences page with the pomodoro and break durations.
pub struct TimerPreferencesPage {
    /// The underlying Libadwaita preferences page widget.
    pub widget: PreferencesPage,
    /// Spin row bound to each duration.
    pub spin_rows: HashMap<DurationSetting, SpinRow>,
}

impl TimerPreferencesPage {
    /// Creates the page and fills it with the stored durations.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::Settings` if a duration cannot be read.
    pub fn new(config: Arc<dyn ConfigStore>) -> Result<Self, PreferencesError> {
        let durations = TimerDurations::load(config.as_ref())?;

        let widget = PreferencesPage::builder()
            .title("Timer")
            .icon_name("alarm-symbolic")
            .accessible_role(Group)
            .build();

        let group = PreferencesGroup::builder().title("Duration").build();

        let mut spin_rows = HashMap::new();
        for setting in DurationSetting::ALL {
            let spin_row = create_duration_row(setting, durations.get(setting), config.clone());
            group.add(&spin_row);
            spin_rows.insert(setting, spin_row);
        }

        widget.add(&group);

        debug!("TimerPreferencesPage: Created");

        Ok(Self { widget, spin_rows })
    }
}

/// Creates a spin row bounded to the allowed duration range.
fn create_duration_row(
    setting: DurationSetting,
    value: i32,
    config: Arc<dyn ConfigStore>,
) -> SpinRow {
    let adjustment = Adjustment::new(
        f64::from(value),
        f64::from(MIN_DURATION),
        f64::from(MAX_DURATION),
        1.0,  // step
        10.0, // page increment
        0.0,  // page size
    );

    let spin_row = SpinRow::builder()
        .title(setting.title())
        .subtitle("Minutes")
        .adjustment(&adjustment)
        .numeric(true)
        .digits(0)
        .build();

    spin_row.connect_value_notify(move |row| {
        let new_value = row.value().round() as i32;

        if let Err(e) = TimerDurations::store(config.as_ref(), setting, new_value) {
            ErrorReporter::error(&Error::from(e), "Failed to store timer duration");
        }
    });

    spin_row
}
