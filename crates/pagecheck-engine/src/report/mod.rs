use serde::Serialize;

use crate::check::{Outcome, Verdict};

/// Verdicts for one group under test.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub name: String,
    pub verdicts: Vec<Verdict>,
}

impl GroupReport {
    /// A group is green only if every verdict passed.
    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(Verdict::passed)
    }
}

/// Grouped results of a full run, in first-registration order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub groups: Vec<GroupReport>,
}

impl Report {
    pub fn all_passed(&self) -> bool {
        self.groups.iter().all(GroupReport::passed)
    }

    pub fn verdict_count(&self) -> usize {
        self.groups.iter().map(|g| g.verdicts.len()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| &g.verdicts)
            .filter(|v| !v.passed())
            .count()
    }

    /// Verdicts that did not pass, across all groups.
    pub fn failures(&self) -> impl Iterator<Item = &Verdict> {
        self.groups
            .iter()
            .flat_map(|g| &g.verdicts)
            .filter(|v| !v.passed())
    }

    /// Broken (authoring-defect) verdicts, across all groups.
    pub fn broken(&self) -> impl Iterator<Item = &Verdict> {
        self.groups
            .iter()
            .flat_map(|g| &g.verdicts)
            .filter(|v| matches!(v.outcome, Outcome::Broken { .. }))
    }
}

/// Groups verdicts by group name, preserving the order groups first appear
/// and the order of verdicts within each group.
///
/// Aggregation never short-circuits: every verdict is kept, so one run
/// surfaces every divergence rather than only the first.
pub fn aggregate(verdicts: Vec<Verdict>) -> Report {
    let mut groups: Vec<GroupReport> = Vec::new();
    for verdict in verdicts {
        match groups.iter_mut().find(|g| g.name == verdict.group) {
            Some(group) => group.verdicts.push(verdict),
            None => groups.push(GroupReport {
                name: verdict.group.clone(),
                verdicts: vec![verdict],
            }),
        }
    }
    Report { groups }
}
