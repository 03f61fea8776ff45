//! Snapshot of everything a dashboard needs to render one frame, as JSON.

use crate::{
    filter::{EmptyState, FilterQuery, StatusCounts},
    geo::Bounds,
    identity::Viewer,
    issue::{Coordinates, Issue},
    recommend::AssignmentCandidate,
    types::IssueId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskSnapshot {
    pub viewer:        Viewer,
    pub query:         FilterQuery,
    /// Counts over everything in the viewer's scope, before user filters.
    pub counts:        StatusCounts,
    pub high_priority: usize,
    pub categories:    Vec<String>,
    pub visible:       Vec<Issue>,
    pub empty_state:   Option<EmptyState>,
    pub map_center:    Coordinates,
    pub map_bounds:    Option<Bounds>,
    /// Only for visible issues the viewer may assign.
    pub assignment_menus: Vec<AssignmentMenu>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentMenu {
    pub issue_id:   IssueId,
    pub candidates: Vec<AssignmentCandidate>,
}
