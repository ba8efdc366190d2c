//! The built-in scenario table for the portfolio page.
//!
//! Pure data: every entry is a (group, name, path, projection, expectation)
//! row consumed by the generic evaluation loop in the engine. Expected
//! values are literals; when the page content changes deliberately, this
//! table is the single place to update.

use pagecheck_engine::{Expectation, Projection, Registry, ScenarioDef, SelectorPath};

/// The AI Engineering Learning Project card: third card in the AI section.
fn learning_card() -> SelectorPath {
    SelectorPath::id("ai").marker("project-card").nth(2)
}

/// The AI & Analytics skill group: fifth group in the about section.
fn ai_analytics_group() -> SelectorPath {
    SelectorPath::id("about").marker("about__skill-group").nth(4)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the portfolio registry, keeping only scenarios whose name
/// contains `filter` when one is given.
pub fn portfolio_suite(filter: Option<&str>) -> Registry {
    let mut registry = Registry::new();
    let mut add = |group: &str,
                   name: &str,
                   path: SelectorPath,
                   projection: Projection,
                   expectation: Expectation| {
        if let Some(needle) = filter
            && !name.contains(needle)
        {
            return;
        }
        registry
            .register(ScenarioDef::new(group, name, path, projection, expectation))
            .expect("scenario names in the built-in suite are unique");
    };

    // AI Engineering Learning Project card
    add(
        "AI project card",
        "card title",
        learning_card().marker("project-card__title"),
        Projection::Text,
        Expectation::TextsInOrder(strings(&["AI Engineering Learning Project"])),
    );
    add(
        "AI project card",
        "card icon",
        learning_card().marker("project-card__icon"),
        Projection::Text,
        Expectation::TextsInOrder(strings(&["\u{1F393}"])),
    );
    add(
        "AI project card",
        "card description",
        learning_card().marker("project-card__description"),
        Projection::Text,
        Expectation::ContainsAll(strings(&[
            "Comprehensive LLM engineering project",
            "production-ready Python implementations",
            "AI agents",
            "multi-provider API integration",
            "conversational AI systems",
        ])),
    );
    add(
        "AI project card",
        "github link target",
        learning_card().marker("project-card__link"),
        Projection::Attr("href".to_string()),
        Expectation::AttrEquals("https://github.com/Bytes0211/ai_engineering".to_string()),
    );
    add(
        "AI project card",
        "github link label",
        learning_card().marker("project-card__link"),
        Projection::Text,
        Expectation::ContainsAll(strings(&["View Details"])),
    );

    // Tech badges on the learning card
    let badge = |path: SelectorPath| path.marker("project-card__tech-badge");
    add(
        "Tech badges",
        "badge count",
        badge(learning_card()),
        Projection::Text,
        Expectation::Count(5),
    );
    for name in ["OpenAI API", "Anthropic Claude", "Google Gemini", "Ollama", "Python"] {
        add(
            "Tech badges",
            &format!("includes {name} badge"),
            badge(learning_card()),
            Projection::Text,
            Expectation::ContainsAll(strings(&[name])),
        );
    }
    add(
        "Tech badges",
        "badges in order",
        badge(learning_card()),
        Projection::Text,
        Expectation::TextsInOrder(strings(&[
            "OpenAI API",
            "Anthropic Claude",
            "Google Gemini",
            "Ollama",
            "Python",
        ])),
    );

    // Feature list on the learning card
    let features = || learning_card().marker("project-card__features").tag("li");
    add(
        "Project features",
        "feature count",
        features(),
        Projection::Text,
        Expectation::Count(4),
    );
    for (name, needles) in [
        ("scraper agent feature", vec!["AI web scraper/summarizer agent", "customizable roles"]),
        ("multi-provider feature", vec!["Multi-provider LLM integration", "6+ providers"]),
        ("prompt engineering feature", vec!["Prompt engineering", "optimization techniques"]),
        ("production-ready feature", vec!["Production-ready code", "comprehensive testing"]),
    ] {
        add(
            "Project features",
            name,
            features(),
            Projection::Text,
            Expectation::ContainsAll(strings(&needles)),
        );
    }
    add(
        "Project features",
        "features in order",
        features(),
        Projection::Text,
        Expectation::TextsInOrder(strings(&[
            "AI web scraper/summarizer agent with customizable roles",
            "Multi-provider LLM integration (6+ providers)",
            "Prompt engineering & optimization techniques",
            "Production-ready code with comprehensive testing",
        ])),
    );

    // About section text
    let about_text = || SelectorPath::id("about").marker("about__text");
    for (name, needles) in [
        ("about mentions AI engineering", vec!["AI engineering"]),
        ("about mentions LLM applications", vec!["production-ready LLM applications"]),
        (
            "about mentions providers",
            vec!["multi-provider integration", "OpenAI", "Anthropic", "Google Gemini"],
        ),
        (
            "about mentions chatbots",
            vec!["intelligent chatbots", "natural language data exploration"],
        ),
        (
            "about keeps data engineering focus",
            vec!["Data Engineer", "scalable, reliable, and governed data platforms"],
        ),
    ] {
        add(
            "About section",
            name,
            about_text(),
            Projection::Text,
            Expectation::ContainsAll(strings(&needles)),
        );
    }

    // AI & Analytics skill group
    add(
        "AI & Analytics skills",
        "group heading",
        ai_analytics_group().tag("h4"),
        Projection::Text,
        Expectation::TextsInOrder(strings(&["AI & Analytics"])),
    );
    add(
        "AI & Analytics skills",
        "skill count",
        ai_analytics_group().tag("li"),
        Projection::Text,
        Expectation::Count(7),
    );
    for (name, needles) in [
        ("includes OpenAI API skill", vec!["OpenAI API", "GPT-4", "GPT-3.5"]),
        ("includes Anthropic Claude skill", vec!["Anthropic Claude"]),
        ("includes Google Gemini skill", vec!["Google Gemini"]),
        ("includes Ollama skill", vec!["Ollama", "local LLMs"]),
        ("includes Prompt Engineering skill", vec!["Prompt Engineering"]),
        ("includes AI Agent Development skill", vec!["AI Agent Development"]),
        ("includes Pandas skill", vec!["Pandas"]),
    ] {
        add(
            "AI & Analytics skills",
            name,
            ai_analytics_group().tag("li"),
            Projection::Text,
            Expectation::ContainsAll(strings(&needles)),
        );
    }
    add(
        "AI & Analytics skills",
        "skills in order",
        ai_analytics_group().tag("li"),
        Projection::Text,
        Expectation::TextsInOrder(strings(&[
            "OpenAI API (GPT-4, GPT-3.5)",
            "Anthropic Claude",
            "Google Gemini",
            "Ollama (local LLMs)",
            "Prompt Engineering",
            "AI Agent Development",
            "Pandas",
        ])),
    );

    // Overall page structure
    add(
        "Page structure",
        "three project cards",
        SelectorPath::id("ai").marker("project-card"),
        Projection::Text,
        Expectation::Count(3),
    );
    add(
        "Page structure",
        "about has a section title",
        SelectorPath::id("about").marker("section__title"),
        Projection::Text,
        Expectation::Present,
    );
    add(
        "Page structure",
        "about has content",
        SelectorPath::id("about").marker("about__content"),
        Projection::Text,
        Expectation::Present,
    );
    add(
        "Page structure",
        "six skill groups",
        SelectorPath::id("about").marker("about__skill-group"),
        Projection::Text,
        Expectation::Count(6),
    );
    add(
        "Page structure",
        "all skill groups named",
        SelectorPath::id("about").marker("about__skill-group").tag("h4"),
        Projection::Text,
        Expectation::ContainsAll(strings(&[
            "Languages",
            "Cloud & Infrastructure",
            "Data Engineering",
            "Databases",
            "AI & Analytics",
            "Tools",
        ])),
    );
    add(
        "Page structure",
        "hero names the specialty",
        SelectorPath::anywhere("hero__title"),
        Projection::Text,
        Expectation::ContainsAll(strings(&["AI Integration Specialist"])),
    );

    // Page assets
    add(
        "Page assets",
        "analytics script source",
        SelectorPath::new().tag("script"),
        Projection::Attr("src".to_string()),
        Expectation::AttrEquals("js/analytics.js".to_string()),
    );
    add(
        "Page assets",
        "analytics script loads async",
        SelectorPath::new().tag("script"),
        Projection::Attr("async".to_string()),
        Expectation::Present,
    );
    // Attribute names are lowercased at parse time, viewBox included.
    add(
        "Page assets",
        "hero logo viewbox",
        SelectorPath::anywhere("hero__logo"),
        Projection::Attr("viewbox".to_string()),
        Expectation::AttrEquals("0 0 64 64".to_string()),
    );

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_builds_without_duplicate_names() {
        let registry = portfolio_suite(None);
        assert!(registry.len() > 30);
    }

    #[test]
    fn filter_narrows_by_scenario_name() {
        let all = portfolio_suite(None).len();
        let badges = portfolio_suite(Some("badge"));
        assert!(badges.len() < all);
        assert!(badges.all().iter().all(|def| def.name.contains("badge")));
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        assert!(portfolio_suite(Some("no such scenario")).is_empty());
    }
}
