use outcome::types::template::{parameter_count, render};

#[test]
fn test_render_substitutes_positionally() {
    assert_eq!(render("Value: {0}", &[&"x"]), "Value: x");
    assert_eq!(render("{1} before {0}", &[&"a", &"b"]), "b before a");
}

#[test]
fn test_render_repeats_arguments() {
    assert_eq!(render("{0} and {0}", &[&7]), "7 and 7");
}

#[test]
fn test_render_without_placeholders() {
    assert_eq!(render("nothing to fill", &[]), "nothing to fill");
}

#[test]
fn test_render_escaped_braces() {
    assert_eq!(render("literal {{0}} and {0}", &[&1]), "literal {0} and 1");
}

#[test]
fn test_render_ignores_surplus_arguments() {
    assert_eq!(render("only {0}", &[&1, &2, &3]), "only 1");
}

#[test]
#[should_panic(expected = "references argument 1")]
fn test_render_panics_on_a_missing_argument() {
    let _ = render("{0} then {1}", &[&1]);
}

#[test]
#[should_panic(expected = "malformed placeholder")]
fn test_render_panics_on_a_malformed_placeholder() {
    let _ = render("bad {x}", &[&1]);
}

#[test]
fn test_parameter_count_of_plain_text() {
    assert_eq!(parameter_count(""), 0);
    assert_eq!(parameter_count("no params"), 0);
}

#[test]
fn test_parameter_count_counts_the_highest_index() {
    assert_eq!(parameter_count("{0}"), 1);
    assert_eq!(parameter_count("{0} {1} {1}"), 2);
    assert_eq!(parameter_count("{3}"), 4);
}

#[test]
fn test_parameter_count_skips_escapes_and_malformed() {
    assert_eq!(parameter_count("{{0}}"), 0);
    assert_eq!(parameter_count("{x} {0}"), 1);
}
