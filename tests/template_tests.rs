//! Interpreter tests: list extraction, substitution, and the syntax heuristic.

use std::collections::HashSet;

use perchance_mcp_server::template::{
    self, generate, generate_with, parse_lists, validate, OptionList, RandomSource,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CREATURE: &str = "<p>A [creature] is here</p>

creature
dog|cat|bird";

fn opts(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ---------------------------------------------------------------------------
// parse_lists
// ---------------------------------------------------------------------------

#[test]
fn parse_extracts_body_and_list() {
    let parsed = parse_lists(CREATURE);

    assert_eq!(parsed.body, "<p>A [creature] is here</p>");
    assert_eq!(
        parsed.lists,
        vec![OptionList {
            name: "creature".into(),
            options: opts(&["dog", "cat", "bird"]),
        }]
    );
}

#[test]
fn parse_empty_source() {
    let parsed = parse_lists("");
    assert!(parsed.lists.is_empty());
    assert_eq!(parsed.body, "");
}

#[test]
fn parse_appends_continuation_lines_without_filtering() {
    let parsed = parse_lists("[a]\na\nx | y\ny||\n");
    let list = parsed.list("a").unwrap();
    assert_eq!(list.options, opts(&["x", "y", "y", "", ""]));
}

#[test]
fn parse_keeps_declaration_order() {
    let parsed = parse_lists("[b] [a]\nb\n1|2\n\na\n3|4");
    let names: Vec<&str> = parsed.lists.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn parse_redeclaration_resets_options() {
    let parsed = parse_lists("[a]\na\nx|y\nb\n1|2\na\nz|w");
    assert_eq!(parsed.lists.len(), 2);
    assert_eq!(parsed.lists[0].name, "a");
    assert_eq!(parsed.lists[0].options, opts(&["z", "w"]));
    assert_eq!(parsed.lists[1].options, opts(&["1", "2"]));
}

#[test]
fn parse_bare_line_after_name_starts_new_list() {
    // Without a `|` the line is a list name, not an option
    let parsed = parse_lists("[a]\na\nonly");
    assert_eq!(parsed.lists.len(), 2);
    assert!(parsed.list("a").unwrap().options.is_empty());
    assert!(parsed.list("only").unwrap().options.is_empty());
}

#[test]
fn parse_skips_html_and_placeholder_lines() {
    let parsed = parse_lists("<div>\na\n<b>x|y</b>\n[a]|z\nc|d");
    assert_eq!(parsed.list("a").unwrap().options, opts(&["c", "d"]));
}

#[test]
fn parse_options_before_any_name_are_ignored() {
    let parsed = parse_lists("<p></p>\nx|y\n\nname\n1|2");
    assert_eq!(parsed.lists.len(), 1);
    assert_eq!(parsed.list("name").unwrap().options, opts(&["1", "2"]));
}

#[test]
fn parse_body_is_first_trimmed_line_only() {
    let parsed = parse_lists("  <p>[x]</p>  \n<p>second [x]</p>\nx\na|b");
    assert_eq!(parsed.body, "<p>[x]</p>");
}

#[test]
fn parse_body_falls_back_to_whole_source_when_first_line_blank() {
    let source = "\n<p>[x]</p>\nx\na|b";
    assert_eq!(parse_lists(source).body, source);
}

#[test]
fn parse_strips_carriage_returns() {
    let parsed = parse_lists("<p>[x]</p>\r\nx\r\na|b\r\n");
    assert_eq!(parsed.body, "<p>[x]</p>");
    assert_eq!(parsed.list("x").unwrap().options, opts(&["a", "b"]));
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_without_lists_echoes_first_line() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        generate_with("<p>[nothing] here</p>\n<p>more</p>", &mut rng),
        "<p>[nothing] here</p>"
    );
    assert_eq!(generate_with("\n<p>hi</p>", &mut rng), "\n<p>hi</p>");
    assert_eq!(generate_with("", &mut rng), "");
}

#[test]
fn generate_single_option_list_always_resolves() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..20 {
        assert_eq!(generate_with("[name] and [name]\nname\na|a", &mut rng), "a and a");
    }
}

#[test]
fn generate_repeated_placeholder_gets_same_value() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let out = generate_with("[x]-[x]-[x]\nx\na|b|c|d", &mut rng);
        let parts: Vec<&str> = out.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| *p == parts[0]), "got {out}");
    }
}

#[test]
fn generate_leaves_unknown_placeholders() {
    let mut rng = StdRng::seed_from_u64(4);
    assert_eq!(
        generate_with("[known] [unknown]\nknown\nyes|yes", &mut rng),
        "yes [unknown]"
    );
}

#[test]
fn generate_empty_list_substitutes_empty_string() {
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(generate_with("<p>[x]!</p>\nx", &mut rng), "<p>!</p>");
}

#[test]
fn generate_treats_list_names_literally() {
    let mut rng = StdRng::seed_from_u64(6);
    assert_eq!(
        generate_with("[a.b] [axb]\na.b\nv|v", &mut rng),
        "v [axb]"
    );
}

#[test]
fn generate_end_to_end_example() {
    let allowed = ["dog", "cat", "bird"];
    for _ in 0..30 {
        let out = generate(CREATURE);
        let creature = out
            .strip_prefix("<p>A ")
            .and_then(|s| s.strip_suffix(" is here</p>"))
            .unwrap();
        assert!(allowed.contains(&creature), "unexpected output {out}");
    }
}

#[test]
fn generate_draws_every_option_eventually() {
    let mut seen = HashSet::new();
    for _ in 0..200 {
        seen.insert(generate("[x]\nx\na|b"));
    }
    assert!(seen.contains("a"));
    assert!(seen.contains("b"));
    assert_eq!(seen.len(), 2);
}

#[test]
fn seeded_generation_is_reproducible() {
    let source = "[a] [b] [c]\na\n1|2|3|4\nb\n5|6|7|8\nc\n9|10|11|12";

    let mut first = RandomSource::from_seed(Some(42));
    let mut second = RandomSource::from_seed(Some(42));

    let run_a: Vec<String> = (0..10).map(|_| first.generate(source)).collect();
    let run_b: Vec<String> = (0..10).map(|_| second.generate(source)).collect();

    assert_eq!(run_a, run_b, "same seed must yield the same sequence");
}

#[test]
fn unseeded_source_still_renders() {
    let mut source = RandomSource::from_seed(None);
    assert!(matches!(source, RandomSource::Thread));
    assert_eq!(source.generate("[x]\nx\nq|q"), "q");
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_accepts_list_without_brackets() {
    let report = validate("<p>hello</p>\nanimal\n dog|cat\n");
    assert!(report.valid);
    assert_eq!(report.message, template::validate::VALID_MESSAGE);
}

#[test]
fn validate_accepts_list_with_brackets() {
    assert!(validate("<p>[animal]</p>\nanimal\n  dog|cat\n").valid);
}

#[test]
fn validate_rejects_without_indented_continuation() {
    // Unindented option lines don't satisfy the heuristic
    let report = validate(CREATURE);
    assert!(!report.valid);
    assert_eq!(report.message, template::validate::INVALID_MESSAGE);
}

#[test]
fn validate_blank_line_counts_as_indentation() {
    assert!(validate("<p>[x]</p>\nx\n\ndog|cat\n").valid);
}

#[test]
fn validate_requires_terminating_newline() {
    assert!(!validate("<p>[x]</p>\nx\n dog|cat").valid);
}

#[test]
fn validate_carriage_return_breaks_continuation() {
    assert!(!validate("x\nfoo\n a\rb\n").valid);
    assert!(!validate("x\nfoo\n a\u{2028}b\n").valid);
    assert!(!validate("x\nfoo\n a\u{2029}b\n").valid);
    // CRLF list blocks never qualify because the name line ends in `\r`
    assert!(!validate("<p>[x]</p>\r\nx\r\n a|b\r\n").valid);
}

#[test]
fn validate_carriage_return_inside_indent_is_whitespace() {
    assert!(validate("x\nfoo\n \r\n a\n").valid);
    assert!(validate("x\nfoo\n\r\n").valid);
    assert!(validate("x\nfoo\n\rb\n").valid);
    assert!(!validate("x\nfoo\n\rb\rc\n").valid);
}

#[test]
fn validate_ignores_list_on_first_line() {
    assert!(!validate("x\n dog|cat\n").valid);
}

#[test]
fn validate_rejects_empty_and_plain_text() {
    assert!(!validate("").valid);
    assert!(!validate("just some words").valid);
    assert!(!validate("[a] [b]").valid);
}

#[test]
fn validate_is_idempotent() {
    let source = "<p>[x]</p>\nx\n a|b\n";
    assert_eq!(validate(source), validate(source));
}

#[test]
fn placeholder_probe() {
    use template::validate::has_placeholder;

    assert!(has_placeholder("a [word_1] b"));
    assert!(!has_placeholder("[]"));
    assert!(!has_placeholder("[two words]"));
    assert!(!has_placeholder("[unterminated"));
}
