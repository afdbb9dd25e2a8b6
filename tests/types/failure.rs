use std::error::Error;

use outcome::{BasicFailureType, Failure, FailureType, Outcome};

use crate::support::Boom;

#[test]
fn test_generic_builder_defaults() {
    let failure = Failure::generic().build();
    assert_eq!(failure.kind().title(), BasicFailureType::Generic.title());
    assert_eq!(failure.title(), "");
    assert_eq!(failure.detail(), "");
    assert!(failure.cause().is_none());
}

#[test]
fn test_builder_populates_every_field() {
    let failure = Failure::generic()
        .titled("Import failed")
        .detailed("row {0} of {1} rejected", &[&3, &10])
        .caused_by(Boom("bad utf8"))
        .build();

    assert_eq!(failure.title(), "Import failed");
    assert_eq!(failure.detail(), "row 3 of 10 rejected");
    assert_eq!(failure.cause().unwrap().to_string(), "bad utf8");
}

#[test]
fn test_of_uses_the_given_kind() {
    #[derive(Debug)]
    struct Timeout;

    impl FailureType for Timeout {
        fn title(&self) -> &str {
            "timeout"
        }

        fn template(&self) -> &str {
            "gave up after {0}ms"
        }
    }

    static TIMEOUT: Timeout = Timeout;

    let failure = Failure::of(&TIMEOUT).build();
    assert_eq!(failure.kind().title(), "timeout");
    assert_eq!(failure.kind().parameter_count(), 1);
}

#[test]
fn test_from_cause_attaches_only_the_cause() {
    let failure = Failure::from_cause(Boom("boom"));
    assert_eq!(failure.title(), "");
    assert_eq!(failure.detail(), "");
    assert_eq!(failure.cause().unwrap().to_string(), "boom");
}

#[test]
fn test_equality_is_by_field_values() {
    let build = || {
        Failure::generic()
            .titled("T")
            .detailed("d {0}", &[&1])
            .caused_by(Boom("boom"))
            .build()
    };
    assert_eq!(build(), build());

    let different_detail = Failure::generic().titled("T").build();
    assert_ne!(build(), different_detail);

    let different_cause = Failure::generic()
        .titled("T")
        .detailed("d {0}", &[&1])
        .caused_by(Boom("other"))
        .build();
    assert_ne!(build(), different_cause);
}

#[test]
fn test_clones_compare_equal() {
    let failure = Failure::generic()
        .titled("T")
        .caused_by(Boom("boom"))
        .build();
    assert_eq!(failure.clone(), failure);
}

#[test]
fn test_display_renders_title_detail_and_cause() {
    let failure = Failure::generic()
        .titled("Write failed")
        .detailed("sector {0}", &[&9])
        .caused_by(Boom("disk full"))
        .build();
    assert_eq!(
        failure.to_string(),
        "Write failed: sector 9 (caused by: disk full)"
    );
}

#[test]
fn test_display_falls_back_to_the_kind_title() {
    let failure = Failure::generic().build();
    assert_eq!(failure.to_string(), "generic-failure");
}

#[test]
fn test_error_source_exposes_the_cause() {
    let failure = Failure::from_cause(Boom("boom"));
    let source = failure.source().expect("cause should be the source");
    assert_eq!(source.to_string(), "boom");

    let bare = Failure::generic().build();
    assert!(bare.source().is_none());
}

#[test]
fn test_into_outcome_reinterprets_the_value_type() {
    let failure = Failure::generic().titled("T").build();
    let as_int: Outcome<i32> = failure.clone().into_outcome();
    let as_str: Outcome<&str> = failure.into_outcome();
    assert_eq!(as_int.as_failure(), as_str.as_failure());
}

#[cfg(feature = "serde")]
#[test]
fn test_failure_serializes_as_data() {
    let failure = Failure::generic()
        .titled("T")
        .detailed("d {0}", &[&1])
        .caused_by(Boom("boom"))
        .build();

    let json: serde_json::Value = serde_json::to_value(&failure).unwrap();
    assert_eq!(json["kind"], "generic-failure");
    assert_eq!(json["title"], "T");
    assert_eq!(json["detail"], "d 1");
    assert_eq!(json["cause"], "boom");
}
