pub mod check;
pub mod dom;
pub mod extract;
pub mod io;
pub mod parsing;
pub mod query;
pub mod report;
pub mod scenario;

// Re-export key types for easier usage
pub use check::{Expectation, Outcome, Verdict, match_expectation};
pub use dom::{Document, Element, Node, NodeId};
pub use extract::{Extracted, Projection, extract};
pub use parsing::{ParseError, parse_document};
pub use query::{ResolveError, SelectorPath, resolve};
pub use report::{GroupReport, Report, aggregate};
pub use scenario::{Registry, RegistryError, ScenarioDef, evaluate, run};
