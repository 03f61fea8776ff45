use crate::issue::IssueStatus;
use crate::types::IssueId;
use serde::{Deserialize, Serialize};

/// Everything a viewer can change. Both variants replace the collection;
/// neither touches any other issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DeskCommand {
    /// Menu selection from an assignment dropdown.
    Assign {
        issue_id: IssueId,
        employee: String,
    },
    /// Status change from the detail view.
    SetStatus {
        issue_id: IssueId,
        status:   IssueStatus,
    },
}

impl DeskCommand {
    pub fn issue_id(&self) -> &str {
        match self {
            DeskCommand::Assign { issue_id, .. } | DeskCommand::SetStatus { issue_id, .. } => issue_id,
        }
    }
}
