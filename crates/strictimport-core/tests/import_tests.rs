//! Integration tests for the recursive import engine
//!
//! These tests cover field policies, nested objects, lists, error paths and
//! unexpected-key detection through the public API.

use serde_json::{json, Value};
use strictimport_core::strategy::{ConvertTime, TimeUnit, ValidateDate, ValidateTime};
use strictimport_core::{
    import, FieldDescriptor, Import, ImportErrorKind, ImportOptions, RawInput, SchemaBuilder,
    SchemaNode,
};

fn object(value: Value) -> RawInput {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn run(input: Value, schema: &SchemaNode) -> Result<Value, strictimport_core::ImportError> {
    import(&object(input), schema).map(Value::Object)
}

fn retention(field: impl Fn() -> FieldDescriptor) -> SchemaNode {
    SchemaBuilder::new()
        .scalar("daily", field())
        .scalar("weekly", field())
        .scalar("monthly", field())
        .scalar("yearly", field())
        .build()
        .unwrap()
}

fn backup_schema(retention: SchemaNode) -> SchemaNode {
    SchemaBuilder::new()
        .scalar("source", FieldDescriptor::mandatory())
        .scalar("target", FieldDescriptor::mandatory())
        .object("retention", retention)
        .build()
        .unwrap()
}

#[cfg(test)]
mod scalar_tests {
    use super::*;

    fn bird_schema() -> SchemaNode {
        SchemaBuilder::new()
            .scalar("name", FieldDescriptor::mandatory())
            .scalar("species", FieldDescriptor::mandatory())
            .build()
            .unwrap()
    }

    #[test]
    fn test_import_scalar_round_trip() {
        let input = json!({"name": "Maggie", "species": "Magpie"});
        assert_eq!(run(input.clone(), &bird_schema()).unwrap(), input);
    }

    #[test]
    fn test_optional_scalar_missing_is_omitted() {
        let schema = SchemaBuilder::new()
            .scalar("name", FieldDescriptor::mandatory())
            .scalar("species", FieldDescriptor::optional())
            .build()
            .unwrap();
        let input = json!({"name": "Maggie"});
        assert_eq!(run(input.clone(), &schema).unwrap(), input);
    }

    #[test]
    fn test_optional_scalar_absent_is_omitted() {
        let schema = SchemaBuilder::new()
            .scalar("name", FieldDescriptor::mandatory())
            .scalar("species", FieldDescriptor::optional())
            .build()
            .unwrap();
        let output = run(json!({"name": "Maggie"}), &schema).unwrap();
        assert_eq!(output, json!({"name": "Maggie"}));
    }

    #[test]
    fn test_scalar_defaulted() {
        let schema = SchemaBuilder::new()
            .scalar("name", FieldDescriptor::mandatory())
            .scalar("species", FieldDescriptor::mandatory())
            .scalar("location", FieldDescriptor::mandatory().with_default("Europe"))
            .build()
            .unwrap();
        let output = run(json!({"name": "Maggie", "species": "Magpie"}), &schema).unwrap();
        assert_eq!(
            output,
            json!({"name": "Maggie", "species": "Magpie", "location": "Europe"})
        );
    }

    #[test]
    fn test_present_value_beats_default() {
        let schema = SchemaBuilder::new()
            .scalar("location", FieldDescriptor::mandatory().with_default("Europe"))
            .build()
            .unwrap();
        let output = run(json!({"location": "Asia"}), &schema).unwrap();
        assert_eq!(output, json!({"location": "Asia"}));
    }

    #[test]
    fn test_mandatory_missing() {
        let schema = SchemaBuilder::new()
            .scalar("name", FieldDescriptor::mandatory())
            .scalar("species", FieldDescriptor::mandatory())
            .scalar("location", FieldDescriptor::mandatory())
            .build()
            .unwrap();
        let err = run(json!({"name": "Maggie", "species": "Magpie"}), &schema).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::MandatoryMissing);
        assert_eq!(err.path, r#"["location"]"#);
        assert_eq!(err.to_string(), r#"["location"] is missing from array"#);
    }

    #[test]
    fn test_mandatory_null_counts_as_missing() {
        let schema = SchemaBuilder::new()
            .scalar("location", FieldDescriptor::mandatory())
            .build()
            .unwrap();
        let err = run(json!({"location": null}), &schema).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::MandatoryMissing);
    }

    #[test]
    fn test_validate_pass() {
        let schema = SchemaBuilder::new()
            .scalar("maxDuration", FieldDescriptor::mandatory().with_validator(ValidateTime))
            .build()
            .unwrap();
        let input = json!({"maxDuration": "04:00:00"});
        assert_eq!(run(input.clone(), &schema).unwrap(), input);
    }

    #[test]
    fn test_validate_fail() {
        let schema = SchemaBuilder::new()
            .scalar("maxDuration", FieldDescriptor::mandatory().with_validator(ValidateTime))
            .build()
            .unwrap();
        let err = run(json!({"maxDuration": "4h"}), &schema).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::Validation);
        assert_eq!(
            err.to_string(),
            r#"Validation failed for ["maxDuration"]: invalid format, time expected (HH:MM:SS)"#
        );
    }

    #[test]
    fn test_optional_validated_scalar_missing() {
        let schema = SchemaBuilder::new()
            .scalar("name", FieldDescriptor::mandatory())
            .scalar("birthday", FieldDescriptor::optional().with_validator(ValidateDate::iso()))
            .build()
            .unwrap();
        let input = json!({"name": "Maggie"});
        assert_eq!(run(input.clone(), &schema).unwrap(), input);
    }

    #[test]
    fn test_validate_defaulted() {
        let field = FieldDescriptor::mandatory()
            .with_validator(ValidateTime)
            .with_default("08:00:00");
        let schema = SchemaBuilder::new().scalar("maxDuration", field).build().unwrap();
        assert_eq!(run(json!({}), &schema).unwrap(), json!({"maxDuration": "08:00:00"}));
    }

    #[test]
    fn test_validate_defaulted_fail() {
        let field = FieldDescriptor::mandatory()
            .with_validator(ValidateTime)
            .with_default("8h");
        let schema = SchemaBuilder::new().scalar("maxDuration", field).build().unwrap();
        let err = run(json!({}), &schema).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::Validation);
        assert_eq!(err.path, r#"["maxDuration"]"#);
    }

    #[test]
    fn test_convert() {
        let field = FieldDescriptor::mandatory()
            .with_converter(ConvertTime::new(TimeUnit::Hms, TimeUnit::Seconds));
        let schema = SchemaBuilder::new().scalar("maxDuration", field).build().unwrap();
        let output = run(json!({"maxDuration": "01:00:00"}), &schema).unwrap();
        assert_eq!(output, json!({"maxDuration": 3600}));
    }

    #[test]
    fn test_convert_failure_is_import_error() {
        let field = FieldDescriptor::mandatory()
            .with_converter(ConvertTime::new(TimeUnit::Hms, TimeUnit::Seconds));
        let schema = SchemaBuilder::new().scalar("maxDuration", field).build().unwrap();
        let err = run(json!({"maxDuration": "soon"}), &schema).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::Conversion);
        assert!(err.to_string().starts_with(r#"Validation failed for ["maxDuration"]: "#));
    }

    #[test]
    fn test_convert_skipped_when_absent() {
        let schema = SchemaBuilder::new()
            .scalar("key", FieldDescriptor::mandatory())
            .scalar(
                "maxDuration",
                FieldDescriptor::optional()
                    .with_converter(ConvertTime::new(TimeUnit::Hms, TimeUnit::Seconds)),
            )
            .build()
            .unwrap();
        let input = json!({"key": "value"});
        assert_eq!(run(input.clone(), &schema).unwrap(), input);
    }

    #[test]
    fn test_unexpected_scalar() {
        let err = run(
            json!({"name": "Maggie", "species": "Magpie", "beak": "nice"}),
            &bird_schema(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::UnexpectedKey);
        assert_eq!(err.path, r#"["beak"]"#);
        assert_eq!(
            err.to_string(),
            r#"["beak"] with value 'nice' is not expected in array"#
        );
    }

    #[test]
    fn test_unexpected_composite_omits_value() {
        let err = run(
            json!({"name": "Maggie", "species": "Magpie", "feathers": {"color": "black"}}),
            &bird_schema(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), r#"["feathers"] is not expected in array"#);
    }

    #[test]
    fn test_unexpected_reports_first_key_in_input_order() {
        let err = run(
            json!({"name": "Maggie", "wings": 2, "species": "Magpie", "beak": "nice"}),
            &bird_schema(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), r#"["wings"] with value '2' is not expected in array"#);
    }

    #[test]
    fn test_optional_scalar_sent_empty_is_unexpected() {
        let schema = SchemaBuilder::new()
            .scalar("name", FieldDescriptor::mandatory())
            .scalar("nickname", FieldDescriptor::optional())
            .build()
            .unwrap();
        let err = run(json!({"name": "Maggie", "nickname": ""}), &schema).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::UnexpectedKey);
        assert_eq!(err.path, r#"["nickname"]"#);
        assert_eq!(err.to_string(), r#"["nickname"] with value '' is not expected in array"#);
    }

    #[test]
    fn test_optional_scalar_sent_empty_with_default_is_consumed() {
        let schema = SchemaBuilder::new()
            .scalar("name", FieldDescriptor::mandatory())
            .scalar("nickname", FieldDescriptor::optional().with_default("Mag"))
            .build()
            .unwrap();
        let output = run(json!({"name": "Maggie", "nickname": ""}), &schema).unwrap();
        assert_eq!(output, json!({"name": "Maggie", "nickname": "Mag"}));
    }

    #[test]
    fn test_optional_scalar_sent_null_is_tolerated() {
        let schema = SchemaBuilder::new()
            .scalar("name", FieldDescriptor::mandatory())
            .scalar("nickname", FieldDescriptor::optional())
            .build()
            .unwrap();
        let output = run(json!({"name": "Maggie", "nickname": null}), &schema).unwrap();
        assert_eq!(output, json!({"name": "Maggie"}));
    }

    #[test]
    fn test_unexpected_null_tolerated_by_default() {
        let input = json!({"name": "Maggie", "species": "Magpie", "beak": null});
        let output = run(input, &bird_schema()).unwrap();
        assert_eq!(output, json!({"name": "Maggie", "species": "Magpie"}));
    }

    #[test]
    fn test_unexpected_null_rejected_in_strict_mode() {
        let schema = bird_schema();
        let input = object(json!({"name": "Maggie", "species": "Magpie", "beak": null}));
        let err = Import::new(&input, &schema)
            .with_options(ImportOptions::strict())
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), r#"["beak"] is not expected in array"#);
    }

    #[test]
    fn test_scalars_fail_before_unexpected_scan() {
        let err = run(json!({"beak": "nice"}), &bird_schema()).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::MandatoryMissing);
        assert_eq!(err.path, r#"["name"]"#);
    }
}

#[cfg(test)]
mod dictionary_tests {
    use super::*;

    #[test]
    fn test_import_dictionary() {
        let input = json!({
            "source": "/home/",
            "target": "/backup/",
            "retention": {"daily": "180", "weekly": "52", "monthly": "24", "yearly": "10"}
        });
        let schema = backup_schema(retention(FieldDescriptor::mandatory));
        assert_eq!(run(input.clone(), &schema).unwrap(), input);
    }

    #[test]
    fn test_import_dictionary_optional_block_disappears() {
        let input = json!({"source": "/home/", "target": "/backup/"});
        let schema = backup_schema(retention(FieldDescriptor::optional));
        assert_eq!(run(input.clone(), &schema).unwrap(), input);
    }

    #[test]
    fn test_import_dictionary_empty_block_is_unexpected() {
        let input = json!({"source": "/home/", "target": "/backup/", "retention": {}});
        let schema = backup_schema(retention(FieldDescriptor::optional));
        let err = run(input, &schema).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::UnexpectedKey);
        assert_eq!(err.to_string(), r#"["retention"] is not expected in array"#);
    }

    #[test]
    fn test_import_dictionary_empty_block_with_defaults_is_consumed() {
        let input = json!({"source": "/home/", "target": "/backup/", "retention": {}});
        let schema = backup_schema(retention(|| FieldDescriptor::optional().with_default("7")));
        let output = run(input, &schema).unwrap();
        assert_eq!(
            output["retention"],
            json!({"daily": "7", "weekly": "7", "monthly": "7", "yearly": "7"})
        );
    }

    #[test]
    fn test_import_dictionary_mandatory() {
        let retention = SchemaBuilder::new()
            .scalar("daily", FieldDescriptor::mandatory())
            .scalar("weekly", FieldDescriptor::optional())
            .build()
            .unwrap();
        let err = run(
            json!({"source": "/home/", "target": "/backup/"}),
            &backup_schema(retention),
        )
        .unwrap_err();
        assert_eq!(err.path, r#"["retention"]["daily"]"#);
        assert_eq!(err.to_string(), r#"["retention"]["daily"] is missing from array"#);
    }

    #[test]
    fn test_import_dictionary_defaulted() {
        let retention = SchemaBuilder::new()
            .scalar("daily", FieldDescriptor::optional().with_default(365))
            .scalar("weekly", FieldDescriptor::optional())
            .scalar("monthly", FieldDescriptor::optional())
            .scalar("yearly", FieldDescriptor::optional())
            .build()
            .unwrap();
        let output = run(
            json!({"source": "/home/", "target": "/backup/"}),
            &backup_schema(retention),
        )
        .unwrap();
        assert_eq!(
            output,
            json!({"source": "/home/", "target": "/backup/", "retention": {"daily": 365}})
        );
    }

    #[test]
    fn test_string_default_converted_to_number() {
        let daily = FieldDescriptor::optional()
            .with_default("365")
            .with_converter(strictimport_core::strategy::ConvertInteger);
        let retention = SchemaBuilder::new().scalar("daily", daily).build().unwrap();
        let output = run(
            json!({"source": "/home/", "target": "/backup/"}),
            &backup_schema(retention),
        )
        .unwrap();
        assert_eq!(output["retention"]["daily"], json!(365));
    }

    #[test]
    fn test_dictionary_not_an_object() {
        let err = run(
            json!({"source": "/home/", "target": "/backup/", "retention": "forever"}),
            &backup_schema(retention(FieldDescriptor::optional)),
        )
        .unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::Shape);
        assert_eq!(err.to_string(), r#"["retention"] is not an object"#);
    }

    #[test]
    fn test_unexpected_key_inside_dictionary() {
        let err = run(
            json!({"source": "/home/", "target": "/backup/", "retention": {"hourly": "24"}}),
            &backup_schema(retention(FieldDescriptor::optional)),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"["retention"]["hourly"] with value '24' is not expected in array"#
        );
    }

    fn recursion_schema() -> SchemaNode {
        let level3 = SchemaBuilder::new()
            .scalar("scalar", FieldDescriptor::mandatory())
            .build()
            .unwrap();
        let level2 = SchemaBuilder::new().object("level3", level3).build().unwrap();
        let level1 = SchemaBuilder::new().object("level2", level2).build().unwrap();
        SchemaBuilder::new().object("level1", level1).build().unwrap()
    }

    #[test]
    fn test_recursion() {
        let input = json!({"level1": {"level2": {"level3": {"scalar": "15"}}}});
        assert_eq!(run(input.clone(), &recursion_schema()).unwrap(), input);
    }

    #[test]
    fn test_recursion_error() {
        let input = json!({"level1": {"level2": {"level3": {}}}});
        let err = run(input, &recursion_schema()).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"["level1"]["level2"]["level3"]["scalar"] is missing from array"#
        );
    }
}

#[cfg(test)]
mod scalar_list_tests {
    use super::*;

    fn sports_schema(field: FieldDescriptor) -> SchemaNode {
        SchemaBuilder::new()
            .scalar("scalar", FieldDescriptor::mandatory())
            .scalar_list("sports", field)
            .build()
            .unwrap()
    }

    #[test]
    fn test_scalar_list() {
        let input = json!({"scalar": "value", "sports": ["soccer", "golf", "marathon"]});
        let schema = sports_schema(FieldDescriptor::mandatory());
        assert_eq!(run(input.clone(), &schema).unwrap(), input);
    }

    #[test]
    fn test_scalar_instead_of_list() {
        let input = json!({"scalar": "value", "sports": "soccer"});
        let err = run(input, &sports_schema(FieldDescriptor::mandatory())).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::Shape);
        assert_eq!(err.to_string(), r#"["sports"] is not an array"#);
    }

    #[test]
    fn test_scalar_list_defaulted() {
        let schema = sports_schema(FieldDescriptor::mandatory().with_default("Dodgeball"));
        let output = run(json!({"scalar": "value"}), &schema).unwrap();
        assert_eq!(output, json!({"scalar": "value", "sports": ["Dodgeball"]}));
    }

    #[test]
    fn test_scalar_list_mandatory() {
        let err = run(json!({"scalar": "value"}), &sports_schema(FieldDescriptor::mandatory()))
            .unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::MandatoryMissing);
        assert_eq!(
            err.to_string(),
            r#"["sports"][] is mandatory, needs to contain at least one value"#
        );
    }

    #[test]
    fn test_empty_list_equals_missing_list() {
        let schema = sports_schema(FieldDescriptor::mandatory());
        let missing = run(json!({"scalar": "value"}), &schema).unwrap_err();
        let empty = run(json!({"scalar": "value", "sports": []}), &schema).unwrap_err();
        assert_eq!(missing, empty);
    }

    #[test]
    fn test_scalar_list_optional() {
        let input = json!({"scalar": "value"});
        let schema = sports_schema(FieldDescriptor::optional());
        assert_eq!(run(input.clone(), &schema).unwrap(), input);
    }

    #[test]
    fn test_optional_scalar_list_sent_empty_is_unexpected() {
        let input = json!({"scalar": "value", "sports": []});
        let err = run(input, &sports_schema(FieldDescriptor::optional())).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::UnexpectedKey);
        assert_eq!(err.path, r#"["sports"]"#);
        assert_eq!(err.to_string(), r#"["sports"] is not expected in array"#);
    }

    #[test]
    fn test_scalar_list_validate_pass() {
        let schema = SchemaBuilder::new()
            .scalar("scalar", FieldDescriptor::mandatory())
            .scalar_list("time", FieldDescriptor::mandatory().with_validator(ValidateTime))
            .build()
            .unwrap();
        let input = json!({"scalar": "value", "time": ["08:00:00"]});
        assert_eq!(run(input.clone(), &schema).unwrap(), input);
    }

    #[test]
    fn test_scalar_list_validate_fail() {
        let schema = SchemaBuilder::new()
            .scalar("scalar", FieldDescriptor::mandatory())
            .scalar_list("time", FieldDescriptor::mandatory().with_validator(ValidateTime))
            .build()
            .unwrap();
        let err = run(json!({"scalar": "value", "time": ["08:00:00", "8h"]}), &schema)
            .unwrap_err();
        assert_eq!(err.path, r#"["time"][]"#);
        assert_eq!(
            err.to_string(),
            r#"Validation failed for ["time"][]: invalid format, time expected (HH:MM:SS)"#
        );
    }

    #[test]
    fn test_scalar_list_convert_keeps_order() {
        let field = FieldDescriptor::mandatory()
            .with_validator(ValidateTime)
            .with_converter(ConvertTime::new(TimeUnit::Hms, TimeUnit::Seconds));
        let schema = SchemaBuilder::new()
            .scalar("scalar", FieldDescriptor::mandatory())
            .scalar_list("time", field)
            .build()
            .unwrap();
        let output = run(
            json!({"scalar": "value", "time": ["02:00:00", "00:00:30"]}),
            &schema,
        )
        .unwrap();
        assert_eq!(output, json!({"scalar": "value", "time": [7200, 30]}));
    }
}

#[cfg(test)]
mod dictionary_list_tests {
    use super::*;

    fn jobs_schema(field: impl Fn() -> FieldDescriptor) -> SchemaNode {
        let jobs = SchemaBuilder::new()
            .scalar("source", field())
            .scalar("target", field())
            .build()
            .unwrap();
        SchemaBuilder::new()
            .scalar("scalar", FieldDescriptor::mandatory())
            .object_list("jobs", jobs)
            .build()
            .unwrap()
    }

    #[test]
    fn test_import_list() {
        let input = json!({
            "scalar": "value",
            "jobs": [
                {"source": "/home/", "target": "/backup/home/"},
                {"source": "/data/", "target": "/backup/data/"}
            ]
        });
        assert_eq!(run(input.clone(), &jobs_schema(FieldDescriptor::mandatory)).unwrap(), input);
    }

    #[test]
    fn test_import_list_optional() {
        let input = json!({"scalar": "value"});
        assert_eq!(run(input.clone(), &jobs_schema(FieldDescriptor::optional)).unwrap(), input);
    }

    #[test]
    fn test_optional_list_sent_empty_is_unexpected() {
        let input = json!({"scalar": "value", "jobs": []});
        let err = run(input, &jobs_schema(FieldDescriptor::optional)).unwrap_err();
        assert_eq!(err.to_string(), r#"["jobs"] is not expected in array"#);
    }

    #[test]
    fn test_import_list_defaulted_synthesizes_one_element() {
        let jobs = SchemaBuilder::new()
            .scalar("source", FieldDescriptor::mandatory().with_default("/home/"))
            .scalar("target", FieldDescriptor::mandatory().with_default("/backup/"))
            .build()
            .unwrap();
        let schema = SchemaBuilder::new()
            .scalar("scalar", FieldDescriptor::mandatory())
            .object_list("jobs", jobs)
            .build()
            .unwrap();

        let output = run(json!({"scalar": "value"}), &schema).unwrap();
        assert_eq!(
            output,
            json!({"scalar": "value", "jobs": [{"source": "/home/", "target": "/backup/"}]})
        );

        let input = object(json!({"scalar": "value"}));
        let output = Import::new(&input, &schema)
            .with_options(ImportOptions::default().with_synthesize_absent_list_element(false))
            .into_result()
            .unwrap();
        assert_eq!(Value::Object(output), json!({"scalar": "value"}));
    }

    #[test]
    fn test_import_list_mandatory() {
        let err = run(json!({"scalar": "value"}), &jobs_schema(FieldDescriptor::mandatory))
            .unwrap_err();
        assert_eq!(err.path, r#"["jobs"][]["source"]"#);
        assert_eq!(err.to_string(), r#"["jobs"][]["source"] is missing from array"#);
    }

    #[test]
    fn test_element_errors_use_placeholder() {
        let input = json!({
            "scalar": "value",
            "jobs": [
                {"source": "/home/", "target": "/backup/home/"},
                {"source": "/data/"}
            ]
        });
        let err = run(input, &jobs_schema(FieldDescriptor::mandatory)).unwrap_err();
        assert_eq!(err.to_string(), r#"["jobs"][]["target"] is missing from array"#);
    }

    #[test]
    fn test_element_unexpected_key() {
        let input = json!({
            "scalar": "value",
            "jobs": [{"source": "/home/", "target": "/backup/", "compress": true}]
        });
        let err = run(input, &jobs_schema(FieldDescriptor::mandatory)).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"["jobs"][]["compress"] with value 'true' is not expected in array"#
        );
    }

    #[test]
    fn test_list_of_objects_not_an_array() {
        let input = json!({"scalar": "value", "jobs": {"source": "/home/", "target": "/b/"}});
        let err = run(input, &jobs_schema(FieldDescriptor::mandatory)).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::Shape);
        assert_eq!(err.to_string(), r#"["jobs"] is not an array"#);
    }

    #[test]
    fn test_list_element_not_an_object() {
        let input = json!({"scalar": "value", "jobs": ["/home/"]});
        let err = run(input, &jobs_schema(FieldDescriptor::mandatory)).unwrap_err();
        assert_eq!(err.kind, ImportErrorKind::Shape);
        assert_eq!(err.to_string(), r#"["jobs"][] is not an object"#);
    }

    #[test]
    fn test_elements_keep_order() {
        let input = json!({
            "scalar": "value",
            "jobs": [{"source": "c"}, {"source": "a"}, {"source": "b"}]
        });
        let output = run(input.clone(), &jobs_schema(FieldDescriptor::optional)).unwrap();
        assert_eq!(output, input);
    }
}

#[cfg(test)]
mod shared_schema_tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_schema_shared_across_threads() {
        let schema = Arc::new(
            SchemaBuilder::new()
                .scalar("name", FieldDescriptor::mandatory().with_validator(ValidateDate::iso()))
                .build()
                .unwrap(),
        );

        let handles: Vec<_> = ["1970-07-03", "2000-01-01", "2010-12-31"]
            .into_iter()
            .map(|date| {
                let schema = Arc::clone(&schema);
                thread::spawn(move || {
                    let input = object(json!({"name": date}));
                    import(&input, schema.as_ref()).map(Value::Object)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    }
}
