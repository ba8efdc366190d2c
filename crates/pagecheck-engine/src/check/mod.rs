use serde::Serialize;

use crate::extract::Extracted;

/// A literal, declarative statement of required content or shape.
///
/// Each variant is resolvable against exactly one [`Extracted`] shape
/// (except [`Count`](Expectation::Count) and
/// [`Present`](Expectation::Present), which only look at cardinality).
/// Applying an expectation to an incompatible shape is a scenario-authoring
/// error and yields [`Outcome::Broken`], not a page failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Exact ordered sequence: length equality and positional equality.
    TextsInOrder(Vec<String>),
    /// Exact cardinality; order-insensitive.
    Count(usize),
    /// Every required substring appears somewhere in the extracted text.
    ContainsAll(Vec<String>),
    /// A single node's named attribute equals the literal. The attribute
    /// name comes from the scenario's `Projection::Attr`.
    AttrEquals(String),
    /// The node (and, under an attribute projection, the attribute) exists.
    Present,
}

/// The outcome of one expectation evaluation. Atomic: wholly pass or
/// wholly fail, no partial credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    /// The page diverges from the expectation.
    Fail { message: String },
    /// The scenario itself is malformed (expectation applied to an
    /// incompatible extraction shape). Kept distinct from page defects so
    /// a bad test is never mistaken for a bad page.
    Broken { message: String },
}

/// Pass/fail for one scenario, with a diagnostic naming expected and
/// actual values. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub group: String,
    pub name: String,
    pub outcome: Outcome,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Pass
    }
}

/// Compares an extraction against an expectation.
pub fn match_expectation(result: &Extracted, expectation: &Expectation) -> Outcome {
    match expectation {
        Expectation::TextsInOrder(expected) => match result {
            Extracted::Texts(actual) => texts_in_order(actual, expected),
            Extracted::Attrs(_) => broken("ordered text expectation applied to an attribute extraction"),
        },
        Expectation::Count(expected) => {
            let actual = result.len();
            if actual == *expected {
                Outcome::Pass
            } else {
                fail(format!("expected {expected} node(s), found {actual}"))
            }
        }
        Expectation::ContainsAll(required) => match result {
            Extracted::Texts(items) => contains_all(items, required),
            Extracted::Attrs(_) => broken("substring expectation applied to an attribute extraction"),
        },
        Expectation::AttrEquals(expected) => match result {
            Extracted::Attrs(items) => attr_equals(items, expected),
            Extracted::Texts(_) => broken("attribute equality expectation applied to a text extraction"),
        },
        Expectation::Present => present(result),
    }
}

fn texts_in_order(actual: &[String], expected: &[String]) -> Outcome {
    if actual.len() != expected.len() {
        return fail(format!(
            "expected {} item(s), found {}: {actual:?}",
            expected.len(),
            actual.len()
        ));
    }
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        if a != e {
            return fail(format!(
                "order mismatch at index {index}: expected {e:?}, found {a:?}"
            ));
        }
    }
    Outcome::Pass
}

fn contains_all(items: &[String], required: &[String]) -> Outcome {
    let missing: Vec<&String> = required
        .iter()
        .filter(|needle| !items.iter().any(|item| item.contains(needle.as_str())))
        .collect();
    if missing.is_empty() {
        Outcome::Pass
    } else {
        fail(format!("required substring(s) not found: {missing:?}"))
    }
}

fn attr_equals(items: &[Option<String>], expected: &str) -> Outcome {
    match items {
        [] => fail("no node matched".to_string()),
        [None] => fail(format!("attribute absent, expected {expected:?}")),
        [Some(actual)] => {
            if actual == expected {
                Outcome::Pass
            } else {
                fail(format!("expected {expected:?}, found {actual:?}"))
            }
        }
        _ => broken(format!(
            "attribute equality requires a single node, {} matched",
            items.len()
        )),
    }
}

fn present(result: &Extracted) -> Outcome {
    match result {
        Extracted::Texts(items) if items.is_empty() => fail("no matching node".to_string()),
        Extracted::Texts(_) => Outcome::Pass,
        Extracted::Attrs(items) => {
            if items.is_empty() {
                return fail("no matching node".to_string());
            }
            let absent = items.iter().filter(|v| v.is_none()).count();
            if absent == 0 {
                Outcome::Pass
            } else {
                fail(format!("attribute absent on {absent} of {} node(s)", items.len()))
            }
        }
    }
}

fn fail(message: String) -> Outcome {
    Outcome::Fail { message }
}

fn broken(message: impl Into<String>) -> Outcome {
    Outcome::Broken {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn texts(items: &[&str]) -> Extracted {
        Extracted::Texts(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn ordered_match_passes_on_exact_sequence() {
        let result = texts(&["OpenAI API", "Anthropic Claude", "Google Gemini", "Ollama", "Python"]);
        let expectation = Expectation::TextsInOrder(
            ["OpenAI API", "Anthropic Claude", "Google Gemini", "Ollama", "Python"]
                .map(String::from)
                .to_vec(),
        );
        assert_eq!(match_expectation(&result, &expectation), Outcome::Pass);
    }

    #[test]
    fn reversed_sequence_fails_at_index_zero() {
        let result = texts(&["OpenAI API", "Anthropic Claude", "Google Gemini", "Ollama", "Python"]);
        let expectation = Expectation::TextsInOrder(
            ["Python", "Ollama", "Google Gemini", "Anthropic Claude", "OpenAI API"]
                .map(String::from)
                .to_vec(),
        );
        match match_expectation(&result, &expectation) {
            Outcome::Fail { message } => assert!(message.contains("index 0"), "{message}"),
            other => panic!("expected Fail, got {other:?}"),
        }
    }

    #[test]
    fn length_mismatch_fails_before_positional_check() {
        let result = texts(&["a", "b"]);
        let expectation = Expectation::TextsInOrder(vec!["a".to_string()]);
        match match_expectation(&result, &expectation) {
            Outcome::Fail { message } => assert!(message.contains("expected 1"), "{message}"),
            other => panic!("expected Fail, got {other:?}"),
        }
    }

    #[rstest]
    #[case(texts(&["a", "b", "c"]), 3, true)]
    #[case(texts(&["a", "b", "c"]), 2, false)]
    #[case(texts(&[]), 0, true)]
    #[case(Extracted::Attrs(vec![Some("x".to_string()), None]), 2, true)]
    fn count_compares_cardinality(
        #[case] result: Extracted,
        #[case] expected: usize,
        #[case] passes: bool,
    ) {
        let outcome = match_expectation(&result, &Expectation::Count(expected));
        assert_eq!(outcome == Outcome::Pass, passes);
    }

    #[test]
    fn count_is_order_insensitive() {
        let forward = texts(&["a", "b", "c"]);
        let shuffled = texts(&["c", "a", "b"]);
        let expectation = Expectation::Count(3);
        assert_eq!(match_expectation(&forward, &expectation), Outcome::Pass);
        assert_eq!(match_expectation(&shuffled, &expectation), Outcome::Pass);
    }

    #[test]
    fn contains_all_ignores_surrounding_wording() {
        let result = texts(&["I moved into AI engineering last year, building agents."]);
        let expectation = Expectation::ContainsAll(vec!["AI engineering".to_string()]);
        assert_eq!(match_expectation(&result, &expectation), Outcome::Pass);
    }

    #[test]
    fn contains_all_names_missing_substrings() {
        let result = texts(&["data pipelines"]);
        let expectation =
            Expectation::ContainsAll(vec!["data".to_string(), "chatbots".to_string()]);
        match match_expectation(&result, &expectation) {
            Outcome::Fail { message } => assert!(message.contains("chatbots"), "{message}"),
            other => panic!("expected Fail, got {other:?}"),
        }
    }

    #[test]
    fn attr_equals_shows_actual_on_mismatch() {
        let result = Extracted::Attrs(vec![Some("https://old.example".to_string())]);
        let expectation = Expectation::AttrEquals("https://new.example".to_string());
        match match_expectation(&result, &expectation) {
            Outcome::Fail { message } => {
                assert!(message.contains("https://old.example"), "{message}")
            }
            other => panic!("expected Fail, got {other:?}"),
        }
    }

    #[test]
    fn presence_fails_on_empty_extraction() {
        let outcome = match_expectation(&texts(&[]), &Expectation::Present);
        assert!(matches!(outcome, Outcome::Fail { .. }));
    }

    #[test]
    fn presence_checks_attribute_existence_not_value() {
        let present = Extracted::Attrs(vec![Some(String::new())]);
        assert_eq!(match_expectation(&present, &Expectation::Present), Outcome::Pass);
        let absent = Extracted::Attrs(vec![None]);
        assert!(matches!(
            match_expectation(&absent, &Expectation::Present),
            Outcome::Fail { .. }
        ));
    }

    #[rstest]
    #[case(Expectation::TextsInOrder(vec![]), Extracted::Attrs(vec![]))]
    #[case(Expectation::ContainsAll(vec![]), Extracted::Attrs(vec![]))]
    #[case(Expectation::AttrEquals(String::new()), Extracted::Texts(vec![]))]
    fn shape_mismatch_is_broken_not_failed(
        #[case] expectation: Expectation,
        #[case] result: Extracted,
    ) {
        assert!(matches!(
            match_expectation(&result, &expectation),
            Outcome::Broken { .. }
        ));
    }
}
