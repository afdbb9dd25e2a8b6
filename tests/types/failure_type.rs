use outcome::{BasicFailureType, FailureType};

#[test]
fn test_basic_types_have_stable_titles() {
    assert_eq!(BasicFailureType::Generic.title(), "generic-failure");
    assert_eq!(
        BasicFailureType::Catastrophic.title(),
        "catastrophic-failure"
    );
}

#[test]
fn test_basic_types_have_empty_templates() {
    assert_eq!(BasicFailureType::Generic.template(), "");
    assert_eq!(BasicFailureType::Generic.parameter_count(), 0);
}

#[test]
fn test_parameter_count_follows_the_template() {
    #[derive(Debug)]
    struct QuotaExceeded;

    impl FailureType for QuotaExceeded {
        fn title(&self) -> &str {
            "quota-exceeded"
        }

        fn template(&self) -> &str {
            "used {0} of {1} allowed {2}s"
        }
    }

    assert_eq!(QuotaExceeded.parameter_count(), 3);
}

#[test]
fn test_parameter_count_is_the_highest_index_plus_one() {
    #[derive(Debug)]
    struct Sparse;

    impl FailureType for Sparse {
        fn title(&self) -> &str {
            "sparse"
        }

        fn template(&self) -> &str {
            "only {4} matters"
        }
    }

    assert_eq!(Sparse.parameter_count(), 5);
}
