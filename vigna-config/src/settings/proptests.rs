//! Property-based tests for settings merging.

use std::collections::BTreeMap;
use std::path::PathBuf;

use proptest::prelude::*;

use super::environment::EnvironmentSettings;
use super::merger::SettingsMerger;
use super::schema::Settings;
use crate::configuration::OptionValue;

fn option_value_strategy() -> impl Strategy<Value = OptionValue> {
    prop_oneof![
        any::<bool>().prop_map(OptionValue::Flag),
        "32'h[0-9a-f]{4}_[0-9a-f]{4}".prop_map(OptionValue::Value),
    ]
}

fn options_strategy() -> impl Strategy<Value = Option<BTreeMap<String, OptionValue>>> {
    prop::option::of(prop::collection::btree_map(
        "[a-z_]{1,12}",
        option_value_strategy(),
        0..6,
    ))
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    (
        prop::option::of("rv32[a-z_]{0,8}"),
        prop::option::of("[a-z]{1,10}\\.vh"),
        prop::option::of("[A-Za-z ]{1,20}"),
        prop::option::of(any::<bool>()),
        options_strategy(),
    )
        .prop_map(|(preset, output, title, strict, options)| Settings {
            preset,
            output: output.map(PathBuf::from),
            title,
            strict,
            options,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Higher precedence scalar values win, lower ones survive when unset.
    #[test]
    fn merge_higher_precedence_wins(low in settings_strategy(), high in settings_strategy()) {
        let mut result = low.clone();
        SettingsMerger::merge_into(&mut result, &high);

        prop_assert_eq!(&result.preset, if high.preset.is_some() { &high.preset } else { &low.preset });
        prop_assert_eq!(&result.output, if high.output.is_some() { &high.output } else { &low.output });
        prop_assert_eq!(&result.title, if high.title.is_some() { &high.title } else { &low.title });
        prop_assert_eq!(result.strict, high.strict.or(low.strict));
    }

    // Every option key of either side survives, with the higher value.
    #[test]
    fn merge_options_is_key_union(low in settings_strategy(), high in settings_strategy()) {
        let mut result = low.clone();
        SettingsMerger::merge_into(&mut result, &high);

        let merged = result.options.unwrap_or_default();
        for (name, value) in low.options.iter().flatten() {
            let expected = high
                .options
                .as_ref()
                .and_then(|o| o.get(name))
                .unwrap_or(value);
            prop_assert_eq!(merged.get(name), Some(expected));
        }
        for (name, value) in high.options.iter().flatten() {
            prop_assert_eq!(merged.get(name), Some(value));
        }
    }

    // Merging a settings value into itself changes nothing.
    #[test]
    fn merge_is_idempotent(settings in settings_strategy()) {
        let mut result = settings.clone();
        SettingsMerger::merge_into(&mut result, &settings);
        prop_assert_eq!(result, settings);
    }

    // Unrecognized words are never read as booleans.
    #[test]
    fn parse_bool_rejects_other_words(word in "[a-z]{2,8}") {
        prop_assume!(!["true", "false", "yes", "no", "on", "off"].contains(&word.as_str()));
        prop_assert!(EnvironmentSettings::parse_bool("test", &word).is_err());
    }
}
