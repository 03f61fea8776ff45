//! Desk events: the record of what each applied command did.
//!
//! The log lives in memory only. A new engine starts from the seed with
//! an empty log.

use crate::issue::IssueStatus;
use crate::types::IssueId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeskEvent {
    IssueAssigned {
        issue_id: IssueId,
        employee: String,
        /// Workload of `employee` after this assignment.
        workload: usize,
        capacity: usize,
    },
    AssignRejected {
        issue_id: IssueId,
        employee: String,
        reason:   RejectReason,
    },
    StatusChanged {
        issue_id: IssueId,
        from:     IssueStatus,
        to:       IssueStatus,
    },
    /// The command named an id the collection does not hold. Nothing changed.
    UnknownIssue {
        issue_id: IssueId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    NotManager,
    NotOpen,
    AlreadyAssigned,
    /// Blank or whitespace-only assignee label.
    EmptyAssignee,
    /// Label found in neither the staff directory nor the user table.
    UnknownAssignee,
    AtCapacity,
}

impl DeskEvent {
    /// Stable name for the `event_type` column of the log.
    pub fn type_name(&self) -> &'static str {
        match self {
            DeskEvent::IssueAssigned { .. }  => "issue_assigned",
            DeskEvent::AssignRejected { .. } => "assign_rejected",
            DeskEvent::StatusChanged { .. }  => "status_changed",
            DeskEvent::UnknownIssue { .. }   => "unknown_issue",
        }
    }
}

/// One row of the in-memory event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub seq:        u64,
    pub viewer:     String,
    pub event_type: String,
    pub payload:    String,
}
