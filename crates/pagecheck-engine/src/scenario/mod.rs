use std::collections::HashSet;

use crate::check::{self, Expectation, Outcome, Verdict};
use crate::dom::Document;
use crate::extract::{self, Projection};
use crate::parsing::parse_document;
use crate::query::{self, SelectorPath};
use crate::report::{Report, aggregate};

/// A named, reusable pairing of path, projection, and expectation.
///
/// Scenarios are pure data: registering them couples nothing to extraction
/// mechanics, so the same table can run against any page.
#[derive(Debug, Clone)]
pub struct ScenarioDef {
    /// Reporting group ("AI project card", "Tech badges", ...).
    pub group: String,
    /// Unique scenario name within the registry.
    pub name: String,
    pub path: SelectorPath,
    pub projection: Projection,
    pub expectation: Expectation,
}

impl ScenarioDef {
    pub fn new(
        group: &str,
        name: &str,
        path: SelectorPath,
        projection: Projection,
        expectation: Expectation,
    ) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            path,
            projection,
            expectation,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate scenario name: {0:?}")]
    DuplicateName(String),
}

/// A declarative table of scenarios, iterated in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    defs: Vec<ScenarioDef>,
    names: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a scenario. Duplicate names are a registration-time error.
    pub fn register(&mut self, def: ScenarioDef) -> Result<(), RegistryError> {
        if !self.names.insert(def.name.clone()) {
            return Err(RegistryError::DuplicateName(def.name.clone()));
        }
        self.defs.push(def);
        Ok(())
    }

    pub fn all(&self) -> &[ScenarioDef] {
        &self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Evaluates one scenario against an already-loaded document.
///
/// Structural lookup failures ([`query::ResolveError`]) are converted to
/// failing verdicts here; they never propagate past this boundary, so one
/// missing element cannot abort the rest of a run.
pub fn evaluate(doc: &Document, def: &ScenarioDef) -> Verdict {
    let outcome = match query::resolve(doc, &def.path) {
        Ok(nodes) => {
            let extracted = extract::extract(doc, &nodes, &def.projection);
            check::match_expectation(&extracted, &def.expectation)
        }
        Err(err) => Outcome::Fail {
            message: err.to_string(),
        },
    };
    Verdict {
        group: def.group.clone(),
        name: def.name.clone(),
        outcome,
    }
}

/// Runs every registered scenario against the markup and aggregates the
/// verdicts.
///
/// The markup is re-parsed for each scenario so no state is shared between
/// scenario runs. A parse failure fails the triggering scenario with the
/// raw parse diagnostic and leaves the others untouched.
pub fn run(markup: &str, registry: &Registry) -> Report {
    let mut verdicts = Vec::with_capacity(registry.len());
    for def in registry.all() {
        let verdict = match parse_document(markup) {
            Ok(doc) => evaluate(&doc, def),
            Err(err) => Verdict {
                group: def.group.clone(),
                name: def.name.clone(),
                outcome: Outcome::Fail {
                    message: format!("markup failed to parse: {err}"),
                },
            },
        };
        verdicts.push(verdict);
    }
    aggregate(verdicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"
        <section id="skills">
            <ul>
                <li class="skill">Rust</li>
                <li class="skill">Python</li>
            </ul>
        </section>
    "#;

    fn skills_in_order() -> ScenarioDef {
        ScenarioDef::new(
            "skills",
            "skills in order",
            SelectorPath::id("skills").marker("skill"),
            Projection::Text,
            Expectation::TextsInOrder(vec!["Rust".to_string(), "Python".to_string()]),
        )
    }

    #[test]
    fn register_rejects_duplicate_names() {
        let mut registry = Registry::new();
        registry.register(skills_in_order()).unwrap();
        let err = registry.register(skills_in_order()).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn run_evaluates_all_scenarios() {
        let mut registry = Registry::new();
        registry.register(skills_in_order()).unwrap();
        registry
            .register(ScenarioDef::new(
                "skills",
                "skill count",
                SelectorPath::id("skills").marker("skill"),
                Projection::Text,
                Expectation::Count(2),
            ))
            .unwrap();

        let report = run(PAGE, &registry);
        assert!(report.all_passed());
        assert_eq!(report.verdict_count(), 2);
    }

    #[test]
    fn missing_id_becomes_failing_verdict_not_abort() {
        let mut registry = Registry::new();
        registry
            .register(ScenarioDef::new(
                "missing",
                "absent section",
                SelectorPath::id("projects").marker("skill"),
                Projection::Text,
                Expectation::Present,
            ))
            .unwrap();
        registry.register(skills_in_order()).unwrap();

        let report = run(PAGE, &registry);
        assert!(!report.all_passed());
        assert_eq!(report.failure_count(), 1);
        // The later scenario still ran and passed.
        assert!(report.groups.iter().any(|g| g.name == "skills" && g.passed()));
    }

    #[test]
    fn parse_failure_fails_each_scenario_with_diagnostic() {
        let mut registry = Registry::new();
        registry.register(skills_in_order()).unwrap();

        let report = run("<div><p>broken", &registry);
        assert_eq!(report.failure_count(), 1);
        let verdict = report.failures().next().unwrap();
        match &verdict.outcome {
            Outcome::Fail { message } => {
                assert!(message.contains("failed to parse"), "{message}")
            }
            other => panic!("expected Fail, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_ordinal_reports_requested_vs_available() {
        let mut registry = Registry::new();
        registry
            .register(ScenarioDef::new(
                "skills",
                "fifth skill",
                SelectorPath::id("skills").marker("skill").nth(4),
                Projection::Text,
                Expectation::Present,
            ))
            .unwrap();

        let report = run(PAGE, &registry);
        let verdict = report.failures().next().unwrap();
        match &verdict.outcome {
            Outcome::Fail { message } => {
                assert!(message.contains('4') && message.contains('2'), "{message}")
            }
            other => panic!("expected Fail, got {other:?}"),
        }
    }
}
