// ABOUTME: Integration tests for the disallowed trait presence rule.
// ABOUTME: Covers counts, labels, ordering between trait groups, and configured rules.

mod support;

use proptest::prelude::*;
use support::{init_tracing, model, shape_id, structure};
use traitlint::config::RuleConfig;
use traitlint::types::TraitLabel;
use traitlint::{Severity, Shape, ShapeType, TraitId, TraitPresenceRule, Validator};

const CLIENT_OPTIONAL_MESSAGE: &str = "@clientOptional trait is not allowed";
const INPUT_MESSAGE: &str = "@input trait is not allowed";

mod default_rule {
    use super::*;

    #[test]
    fn mixed_model_reports_each_shape_trait_pair() {
        init_tracing();
        let model = model([
            structure("example#A", &[TraitId::ClientOptional]),
            structure("example#B", &[TraitId::Input]),
            structure("example#C", &[]),
            structure("example#D", &[TraitId::ClientOptional, TraitId::Input]),
        ]);

        let events = TraitPresenceRule::default().validate(&model);

        let pairs: Vec<_> = events
            .iter()
            .map(|e| (e.shape_id.name(), e.message.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("A", CLIENT_OPTIONAL_MESSAGE),
                ("D", CLIENT_OPTIONAL_MESSAGE),
                ("B", INPUT_MESSAGE),
                ("D", INPUT_MESSAGE),
            ]
        );
    }

    #[test]
    fn all_events_are_warnings_from_client_optional() {
        let model = model([structure(
            "example#Both",
            &[TraitId::ClientOptional, TraitId::Input],
        )]);

        let events = TraitPresenceRule::default().validate(&model);

        assert_eq!(events.len(), 2);
        for event in &events {
            assert_eq!(event.severity, Severity::Warning);
            assert_eq!(event.id, "ClientOptional");
            assert_eq!(event.shape_id, shape_id("example#Both"));
        }
    }

    #[test]
    fn model_without_disallowed_traits_is_clean() {
        let model = model([
            structure("example#Plain", &[]),
            structure("example#Out", &[TraitId::Output]),
            structure("example#Req", &[TraitId::Required]),
        ]);

        assert!(TraitPresenceRule::default().validate(&model).is_empty());
    }

    #[test]
    fn empty_model_is_clean() {
        let model = model(Vec::<Shape>::new());
        assert!(TraitPresenceRule::default().validate(&model).is_empty());
    }

    #[test]
    fn member_shapes_are_reported() {
        let parent = shape_id("example#Widget");
        let member = Shape::new(parent.with_member("name").unwrap(), ShapeType::Member)
            .annotate(TraitId::ClientOptional);
        let model = model([Shape::new(parent, ShapeType::Structure), member]);

        let events = TraitPresenceRule::default().validate(&model);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].shape_id.to_string(), "example#Widget$name");
        assert_eq!(events[0].message, CLIENT_OPTIONAL_MESSAGE);
    }

    #[test]
    fn trait_payload_is_not_inspected() {
        let shape = Shape::new(shape_id("example#Op"), ShapeType::Structure)
            .with_trait(TraitId::Input, serde_json::json!({"unexpected": [1, 2, 3]}));
        let model = model([shape]);

        let events = TraitPresenceRule::default().validate(&model);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, INPUT_MESSAGE);
    }

    #[test]
    fn events_serialize_with_upper_case_severity() {
        let model = model([structure("example#A", &[TraitId::Input])]);
        let events = TraitPresenceRule::default().validate(&model);

        let json = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "ClientOptional",
                "severity": "WARNING",
                "shapeId": "example#A",
                "message": INPUT_MESSAGE,
            })
        );
    }
}

mod collect_findings {
    use super::*;

    #[test]
    fn uses_label_verbatim() {
        let model = model([structure("example#A", &[TraitId::Input])]);
        let label = TraitLabel::new("inputMarker").unwrap();

        let events = TraitPresenceRule::default().collect_findings(&model, &TraitId::Input, &label);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, "@inputMarker trait is not allowed");
    }

    #[test]
    fn unknown_trait_yields_nothing() {
        let model = model([structure("example#A", &[TraitId::Input])]);
        let unknown: TraitId = "example.traits#neverApplied".parse().unwrap();
        let label = TraitLabel::from(&unknown);

        let events = TraitPresenceRule::default().collect_findings(&model, &unknown, &label);
        assert!(events.is_empty());
    }

    #[test]
    fn custom_traits_are_matched_by_id() {
        let custom: TraitId = "example.traits#internal".parse().unwrap();
        let model = model([
            structure("example#A", &[custom.clone()]),
            structure("example#B", &[]),
        ]);

        let events = TraitPresenceRule::default().collect_findings(
            &model,
            &custom,
            &TraitLabel::from(&custom),
        );

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].shape_id, shape_id("example#A"));
        assert_eq!(events[0].message, "@internal trait is not allowed");
    }
}

mod configured_rule {
    use super::*;

    #[test]
    fn configured_order_is_preserved() {
        let config = RuleConfig::from_yaml(
            r#"
name: NoMarkers
disallowed:
  - smithy.api#input
  - trait: smithy.api#clientOptional
    label: clientOptional
"#,
        )
        .unwrap();
        let model = model([structure(
            "example#D",
            &[TraitId::ClientOptional, TraitId::Input],
        )]);

        let events = config.rule().unwrap().validate(&model);

        let messages: Vec<_> = events.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, [INPUT_MESSAGE, CLIENT_OPTIONAL_MESSAGE]);
        assert!(events.iter().all(|e| e.id == "NoMarkers"));
    }

    #[test]
    fn rule_is_usable_as_trait_object() {
        let validators: Vec<Box<dyn Validator>> = vec![Box::new(TraitPresenceRule::default())];
        let model = model([structure("example#A", &[TraitId::Input])]);

        let total: usize = validators.iter().map(|v| v.validate(&model).len()).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn shared_rule_and_model_across_threads() {
        let rule = TraitPresenceRule::default();
        let model = model([
            structure("example#A", &[TraitId::ClientOptional]),
            structure("example#B", &[TraitId::Input]),
        ]);
        let expected = rule.validate(&model);
        let (rule, model) = (&rule, &model);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || rule.validate(model)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

fn shapes_strategy() -> impl Strategy<Value = Vec<(bool, bool, bool)>> {
    prop::collection::vec(any::<(bool, bool, bool)>(), 0..40)
}

fn build_model(flags: &[(bool, bool, bool)]) -> traitlint::Model {
    model(flags.iter().enumerate().map(|(i, (optional, input, output))| {
        let mut traits = Vec::new();
        if *optional {
            traits.push(TraitId::ClientOptional);
        }
        if *input {
            traits.push(TraitId::Input);
        }
        if *output {
            traits.push(TraitId::Output);
        }
        structure(&format!("example#Shape{i}"), &traits)
    }))
}

proptest! {
    #[test]
    fn finding_count_matches_trait_count(flags in shapes_strategy()) {
        let model = build_model(&flags);
        let rule = TraitPresenceRule::default();

        for trait_id in [TraitId::ClientOptional, TraitId::Input, TraitId::Output] {
            let label = TraitLabel::from(&trait_id);
            let events = rule.collect_findings(&model, &trait_id, &label);
            prop_assert_eq!(events.len(), model.shapes_with_trait(&trait_id).len());

            for event in &events {
                let shape = model.get_shape(&event.shape_id).unwrap();
                prop_assert!(shape.has_trait(&trait_id));
            }
        }

        let expected = flags.iter().filter(|f| f.0).count() + flags.iter().filter(|f| f.1).count();
        prop_assert_eq!(rule.validate(&model).len(), expected);
    }

    #[test]
    fn client_optional_group_precedes_input_group(flags in shapes_strategy()) {
        let model = build_model(&flags);
        let events = TraitPresenceRule::default().validate(&model);

        let first_input = events.iter().position(|e| e.message == INPUT_MESSAGE);
        let last_optional = events.iter().rposition(|e| e.message == CLIENT_OPTIONAL_MESSAGE);
        if let (Some(first_input), Some(last_optional)) = (first_input, last_optional) {
            prop_assert!(last_optional < first_input);
        }
    }
}
