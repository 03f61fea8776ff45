//! Filter engine: narrows the issue collection for display.
//!
//! All predicates are conjunctive. `None` on any filter means "all".
//! Order of the input is preserved; nothing is re-sorted.
//!
//! Order of application:
//!   1. Viewer scope (not user adjustable)
//!   2. Free-text search
//!   3. Status
//!   4. Priority
//!   5. Category

use crate::{
    error::{DeskError, DeskResult},
    identity::{Role, Viewer},
    issue::{Issue, IssueStatus, Priority},
};
use serde::{Deserialize, Serialize};

/// Which fields the free-text search looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFields {
    /// Full list view: title, description, category, assignee, submitter.
    #[default]
    Full,
    /// Per-employee view: title, description, category.
    Personal,
}

impl SearchFields {
    /// Managers search the full list view; employees their personal view.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Manager  => SearchFields::Full,
            Role::Employee => SearchFields::Personal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub search:   Option<String>,
    #[serde(default)]
    pub status:   Option<IssueStatus>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub fields:   SearchFields,
}

/// Dropdown value meaning "no restriction".
pub const ALL: &str = "all";

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: IssueStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn fields(mut self, fields: SearchFields) -> Self {
        self.fields = fields;
        self
    }

    /// Pin `fields` to the viewer's role, whatever the query arrived with.
    pub fn for_viewer(self, viewer: &Viewer) -> Self {
        self.fields(SearchFields::for_role(viewer.role))
    }

    /// Build a query from raw dropdown values. `"all"` (any case) or an
    /// empty string clears that filter.
    pub fn from_labels(
        search: &str,
        status: &str,
        priority: &str,
        category: &str,
    ) -> DeskResult<Self> {
        Ok(Self {
            search:   (!search.is_empty()).then(|| search.to_string()),
            status:   Self::parse_status(status)?,
            priority: Self::parse_priority(priority)?,
            category: (!is_all(category)).then(|| category.to_string()),
            fields:   SearchFields::Full,
        })
    }

    pub fn parse_status(label: &str) -> DeskResult<Option<IssueStatus>> {
        if is_all(label) {
            return Ok(None);
        }
        IssueStatus::from_label(label)
            .map(Some)
            .ok_or_else(|| DeskError::InvalidFilter { field: "status", value: label.to_string() })
    }

    pub fn parse_priority(label: &str) -> DeskResult<Option<Priority>> {
        if is_all(label) {
            return Ok(None);
        }
        Priority::from_label(label)
            .map(Some)
            .ok_or_else(|| DeskError::InvalidFilter { field: "priority", value: label.to_string() })
    }

    /// True if any user-adjustable filter restricts the result.
    pub fn is_active(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
            || self.status.is_some()
            || self.priority.is_some()
            || self.category.is_some()
    }
}

fn is_all(label: &str) -> bool {
    let label = label.trim();
    label.is_empty() || label.eq_ignore_ascii_case(ALL)
}

/// Non-managers only ever see issues assigned to their own display name.
pub fn in_scope(issue: &Issue, viewer: &Viewer) -> bool {
    viewer.is_manager() || issue.assigned_to == viewer.name
}

/// Keep issues matching the viewer scope and every active filter.
pub fn filter(issues: &[Issue], query: &FilterQuery, viewer: &Viewer) -> Vec<Issue> {
    let needle = query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let kept: Vec<Issue> = issues
        .iter()
        .filter(|issue| in_scope(issue, viewer))
        .filter(|issue| match &needle {
            Some(n) => matches_search(issue, n, query.fields),
            None => true,
        })
        .filter(|issue| query.status.is_none_or(|s| issue.status == s))
        .filter(|issue| query.priority.is_none_or(|p| issue.priority == p))
        .filter(|issue| {
            query
                .category
                .as_deref()
                .is_none_or(|c| issue.category == c)
        })
        .cloned()
        .collect();

    log::debug!(
        "filter: viewer={} kept {}/{} issues",
        viewer.name,
        kept.len(),
        issues.len()
    );
    kept
}

/// `needle` must already be lowercase.
fn matches_search(issue: &Issue, needle: &str, fields: SearchFields) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(needle);

    if hit(&issue.title) || hit(&issue.description) || hit(&issue.category) {
        return true;
    }
    match fields {
        SearchFields::Full => hit(&issue.assigned_to) || hit(&issue.submitted_by),
        SearchFields::Personal => false,
    }
}

// ── Aggregates ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total:       usize,
    pub open:        usize,
    pub in_progress: usize,
    pub completed:   usize,
}

impl StatusCounts {
    pub fn of(issues: &[Issue]) -> Self {
        issues.iter().fold(Self::default(), |mut acc, issue| {
            acc.total += 1;
            match issue.status {
                IssueStatus::Open       => acc.open += 1,
                IssueStatus::InProgress => acc.in_progress += 1,
                IssueStatus::Completed  => acc.completed += 1,
            }
            acc
        })
    }
}

/// High and Critical combined.
pub fn high_priority_count(issues: &[Issue]) -> usize {
    issues.iter().filter(|i| i.priority.is_high()).count()
}

/// Categories in order of first occurrence; feeds the category dropdown.
pub fn distinct_categories(issues: &[Issue]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for issue in issues {
        if !seen.iter().any(|c| c == &issue.category) {
            seen.push(issue.category.clone());
        }
    }
    seen
}

// ── Empty state ───────────────────────────────────────────────────

/// What the consumer should say when a filter returns nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// Filters are active; loosening them may help.
    NoMatches,
    /// Nothing to show even unfiltered.
    NoIssues,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoMatches => "Try adjusting your filters to see more results.",
            EmptyState::NoIssues  => "No queries available at the moment.",
        }
    }
}

/// `None` when there is something to render.
pub fn empty_state(result: &[Issue], query: &FilterQuery) -> Option<EmptyState> {
    if !result.is_empty() {
        return None;
    }
    Some(if query.is_active() {
        EmptyState::NoMatches
    } else {
        EmptyState::NoIssues
    })
}
