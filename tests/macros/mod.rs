use outcome::{attempt, fail, outcomes, Outcome};

use crate::support::Boom;

#[test]
fn test_attempt_wraps_an_expression() {
    let outcome = attempt!("42".parse::<i32>());
    assert_eq!(outcome, outcomes::success(42));
}

#[test]
fn test_attempt_wraps_a_block() {
    let outcome = attempt!({
        let parsed: i32 = "21".parse()?;
        Ok::<_, std::num::ParseIntError>(parsed * 2)
    });
    assert_eq!(outcome.get(), 42);
}

#[test]
fn test_attempt_captures_the_error() {
    let outcome: Outcome<i32> = attempt!(Err(Boom("boom")));
    assert_eq!(outcome.as_failure().cause().unwrap().to_string(), "boom");
}

#[test]
fn test_fail_with_a_title_only() {
    let outcome: Outcome<()> = fail!("Not ready");
    let failure = outcome.as_failure();
    assert_eq!(failure.title(), "Not ready");
    assert_eq!(failure.detail(), "");
}

#[test]
fn test_fail_renders_the_template() {
    let id = 7;
    let outcome: Outcome<()> = fail!("Lookup failed", "no row with id {0}", id);
    assert_eq!(outcome.as_failure().detail(), "no row with id 7");
}

#[test]
fn test_fail_accepts_multiple_arguments() {
    let outcome: Outcome<()> = fail!("Quota", "used {0} of {1}", 9, 10);
    assert_eq!(outcome.as_failure().detail(), "used 9 of 10");
}
