//! Assignment recommender and collection write-back.
//!
//! Routing:
//!   1. Lowercase title + description.
//!   2. First keyword route (table order) contained in the text wins.
//!   3. No match → the issue's own category.
//!
//! Candidates come from the staff directory entry for the routed
//! department, labelled "Name (Role)", deduplicated, and sorted by how
//! many issues in the whole collection already carry that label.
//!
//! Write-backs never mutate in place. They return a new collection.

use crate::{
    directory::{KeywordRoutes, StaffDirectory},
    identity::Viewer,
    issue::{Issue, IssueStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentCandidate {
    /// "Name (Role)", the exact string written to `assigned_to`.
    pub name:          String,
    pub current_count: usize,
    pub capacity:      usize,
}

impl AssignmentCandidate {
    /// At-capacity candidates stay listed but must not be selectable.
    pub fn is_at_capacity(&self) -> bool {
        self.current_count >= self.capacity
    }
}

/// Department an issue routes to.
pub fn route_department(issue: &Issue, routes: &KeywordRoutes) -> String {
    let text = issue.routing_text();
    // A matched keyword ends the scan even if its route lists no department.
    let routed = routes
        .first_match(&text)
        .and_then(|r| r.departments.first().cloned());

    match routed {
        Some(dept) => {
            log::debug!("route: {} → {dept} (keyword)", issue.id);
            dept
        }
        None => issue.category.clone(),
    }
}

pub fn recommend(
    issue: &Issue,
    all_issues: &[Issue],
    directory: &StaffDirectory,
    routes: &KeywordRoutes,
    capacity: usize,
) -> Vec<AssignmentCandidate> {
    let department = route_department(issue, routes);
    let Some(staff) = directory.lookup(&department) else {
        log::debug!("recommend: no staff listed for '{department}'");
        return Vec::new();
    };

    let mut labels: Vec<String> = Vec::with_capacity(staff.len());
    for member in staff {
        let label = member.label();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    let mut candidates: Vec<AssignmentCandidate> = labels
        .into_iter()
        .map(|name| AssignmentCandidate {
            current_count: workload(all_issues, &name),
            name,
            capacity,
        })
        .collect();

    // sort_by_key is stable: equal workloads keep directory order.
    candidates.sort_by_key(|c| c.current_count);
    candidates
}

/// Issues whose assignee equals `label` exactly.
pub fn workload(issues: &[Issue], label: &str) -> usize {
    issues.iter().filter(|i| i.assigned_to == label).count()
}

/// Managers may assign Open issues that nobody holds yet.
pub fn can_offer_assignment(viewer: &Viewer, issue: &Issue) -> bool {
    viewer.is_manager() && issue.status == IssueStatus::Open && !issue.is_assigned()
}

/// Copy of `issues` with `issue_id`'s assignee replaced. Unknown ids leave
/// the collection unchanged.
pub fn assign(issues: &[Issue], issue_id: &str, employee: &str) -> Vec<Issue> {
    replace_where(issues, issue_id, |issue| {
        issue.assigned_to = employee.to_string();
    })
}

/// Copy of `issues` with `issue_id`'s status replaced. Same rules as `assign`.
pub fn set_status(issues: &[Issue], issue_id: &str, status: IssueStatus) -> Vec<Issue> {
    replace_where(issues, issue_id, |issue| {
        issue.status = status;
    })
}

fn replace_where(issues: &[Issue], issue_id: &str, edit: impl Fn(&mut Issue)) -> Vec<Issue> {
    issues
        .iter()
        .map(|issue| {
            let mut next = issue.clone();
            if next.id == issue_id {
                edit(&mut next);
            }
            next
        })
        .collect()
}
