use outcome::{outcomes, Failure, Outcome, Success};

use crate::support::Boom;

#[test]
fn test_outcome_from_success() {
    let outcome: Outcome<i32> = Success::new(42).into();
    assert_eq!(outcome, outcomes::success(42));
}

#[test]
fn test_outcome_from_failure() {
    let outcome: Outcome<i32> = Failure::generic().titled("T").build().into();
    assert_eq!(outcome.as_failure().title(), "T");
}

#[test]
fn test_outcome_from_result() {
    let ok: Outcome<i32> = Ok::<_, Boom>(42).into();
    assert_eq!(ok, outcomes::success(42));

    let err: Outcome<i32> = Err::<i32, _>(Boom("boom")).into();
    assert_eq!(err.as_failure().cause().unwrap().to_string(), "boom");
}

#[test]
fn test_result_from_outcome() {
    let ok: Result<i32, Failure> = outcomes::success(42).into();
    assert_eq!(ok, Ok(42));

    let err: Result<i32, Failure> = outcomes::titled_failure::<i32, _>("T").into();
    assert_eq!(err.unwrap_err().title(), "T");
}

#[test]
fn test_to_result_round_trips_a_success() {
    let outcome = outcomes::success(42);
    assert_eq!(Outcome::from_result(outcome.to_result()), outcomes::success(42));
}
