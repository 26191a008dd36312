//! Settings merging and precedence handling.

use crate::settings::loader::SettingsSource;
use crate::settings::schema::Settings;

/// Merges settings sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use vigna_config::settings::{Settings, SettingsMerger};
///
/// let low = Settings { title: Some("low".to_string()), ..Default::default() };
/// let high = Settings { title: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// SettingsMerger::merge_into(&mut result, &high);
/// assert_eq!(result.title.as_deref(), Some("high"));
/// ```
pub struct SettingsMerger;

impl SettingsMerger {
    /// Merges sources given lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<SettingsSource>) -> Settings {
        let mut result = Settings::default();
        for source in sources {
            Self::merge_into(&mut result, &source.settings);
        }
        result
    }

    /// Merges `source` into `target`, `source` winning.
    ///
    /// Scalar fields are overwritten when set in `source`. The `options`
    /// maps are merged key by key.
    pub fn merge_into(target: &mut Settings, source: &Settings) {
        if source.preset.is_some() {
            target.preset.clone_from(&source.preset);
        }

        if source.output.is_some() {
            target.output.clone_from(&source.output);
        }

        if source.title.is_some() {
            target.title.clone_from(&source.title);
        }

        if source.strict.is_some() {
            target.strict = source.strict;
        }

        if let Some(ref source_options) = source.options {
            let options = target.options.get_or_insert_with(Default::default);
            for (name, value) in source_options {
                options.insert(name.clone(), value.clone());
            }
        }
    }
}
