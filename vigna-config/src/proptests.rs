//! Property-based tests for rendering and parsing headers.

use proptest::prelude::*;

use crate::configuration::{Configuration, OptionValue};
use crate::parse::HeaderParser;
use crate::render::render;
use crate::schema::{OptionKind, OptionSchema};
use crate::validator::{Validator, Violation};

fn schema() -> &'static OptionSchema {
    OptionSchema::builtin().unwrap()
}

// One optional entry per option, matching the option kind.
fn configuration_strategy() -> impl Strategy<Value = Configuration> {
    let entries: Vec<_> = schema()
        .iter()
        .map(|spec| {
            let value = match spec.kind {
                OptionKind::Flag { .. } => any::<bool>().prop_map(OptionValue::Flag).boxed(),
                OptionKind::Value { .. } => prop_oneof![
                    3 => "32'h[0-9A-F]{4}_[0-9A-F]{4}".prop_map(OptionValue::Value),
                    2 => "[0-9]{1,6}".prop_map(OptionValue::Value),
                    2 => Just(OptionValue::Flag(false)),
                    1 => "[ \t]{0,2}".prop_map(OptionValue::Value),
                    1 => "[ \t]{1,2}32'h[0-9A-F]{4}[ \t]{0,2}".prop_map(OptionValue::Value),
                    1 => "32'h[0-9A-F]{1,4}[ \t]{0,2}[\r\n]{1,2}`define VIGNA_CORE_E_EXTENSION"
                        .prop_map(OptionValue::Value),
                ]
                .boxed(),
            };
            prop::option::of(value).prop_map(move |v| (spec.name, v))
        })
        .collect();

    entries.prop_map(|entries| {
        entries
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect()
    })
}

fn has_malformed_value(config: &Configuration) -> bool {
    Validator::new(schema())
        .validate(config)
        .violations()
        .iter()
        .any(|v| matches!(v, Violation::MalformedValue { .. }))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Parsing a rendered header restores every option's state and literal.
    #[test]
    fn render_then_parse_restores_configuration(config in configuration_strategy()) {
        prop_assume!(!has_malformed_value(&config));
        let header = render(schema(), &config, "Round trip");
        let parsed = HeaderParser::new(schema()).unwrap().parse(&header);

        prop_assert_eq!(parsed.len(), schema().len());
        for spec in schema() {
            prop_assert_eq!(
                parsed.is_enabled(spec.name),
                config.is_enabled(spec.name),
                "state of {}", spec.name
            );
            let original = config.get(spec.name).and_then(OptionValue::literal);
            let restored = parsed.get(spec.name).and_then(OptionValue::literal);
            prop_assert_eq!(restored, original, "literal of {}", spec.name);
        }
    }

    // Parsing is a fixed point after one render/parse cycle.
    #[test]
    fn second_round_trip_is_identical(config in configuration_strategy()) {
        prop_assume!(!has_malformed_value(&config));
        let parser = HeaderParser::new(schema()).unwrap();
        let once = parser.parse(&render(schema(), &config, "x"));
        let twice = parser.parse(&render(schema(), &once, "x"));
        prop_assert_eq!(twice, once);
    }

    // Violations depend only on the enabled state, which survives the round trip.
    #[test]
    fn validation_survives_round_trip(config in configuration_strategy()) {
        prop_assume!(!has_malformed_value(&config));
        let validator = Validator::new(schema());
        let parsed = HeaderParser::new(schema()).unwrap().parse(&render(schema(), &config, "x"));
        prop_assert_eq!(validator.validate(&parsed), validator.validate(&config));
    }

    // A literal that spans lines or carries outer whitespace is always reported,
    // whatever the rest of the configuration.
    #[test]
    fn unreadable_literals_are_reported(config in configuration_strategy()) {
        let unreadable = schema().iter().any(|spec| {
            config
                .get(spec.name)
                .and_then(OptionValue::literal)
                .is_some_and(|literal| literal.trim() != literal || literal.contains(['\n', '\r']))
        });
        prop_assert_eq!(has_malformed_value(&config), unreadable);
    }
}
