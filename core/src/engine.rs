//! The desk engine. Owns the issue collection for one viewer.
//!
//! RULES:
//!   - The collection is only ever replaced, never edited in place.
//!   - Reads (filter, recommend, aggregates) are pure and repeatable.
//!   - Every applied command lands in the event log, including rejections.

use crate::{
    command::DeskCommand,
    config::DeskConfig,
    error::{DeskError, DeskResult},
    event::{DeskEvent, EventLogEntry, RejectReason},
    filter::{self, empty_state, FilterQuery, StatusCounts},
    geo::{map_bounds, map_center, DEFAULT_BOUNDS_PAD},
    identity::{IdentityProvider, Viewer},
    issue::{Issue, IssueStatus},
    recommend::{self, AssignmentCandidate},
    snapshot::{AssignmentMenu, DeskSnapshot},
};

pub struct DeskEngine {
    pub viewer: Viewer,
    config:     DeskConfig,
    issues:     Vec<Issue>,
    event_log:  Vec<EventLogEntry>,
}

impl DeskEngine {
    pub fn new(config: DeskConfig, viewer: Viewer) -> Self {
        let issues = config.issues.clone();
        Self {
            viewer,
            config,
            issues,
            event_log: Vec::new(),
        }
    }

    /// Build for whoever the provider says is signed in.
    pub fn for_identity(config: DeskConfig, identity: &dyn IdentityProvider) -> DeskResult<Self> {
        let viewer = identity.current_viewer().ok_or(DeskError::NotSignedIn)?;
        Ok(Self::new(config, viewer))
    }

    /// Built-in seed, viewed by a user from the built-in directory.
    pub fn build_test(viewer_name: &str) -> DeskResult<Self> {
        let config = DeskConfig::builtin();
        let viewer = config.users.viewer_named(viewer_name)?;
        Ok(Self::new(config, viewer))
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// The full collection, ignoring viewer scope.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn issue(&self, issue_id: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == issue_id)
    }

    pub fn event_log(&self) -> &[EventLogEntry] {
        &self.event_log
    }

    /// Everything in the viewer's scope, no user filters applied.
    pub fn scoped(&self) -> Vec<Issue> {
        filter::filter(&self.issues, &FilterQuery::default(), &self.viewer)
    }

    pub fn visible(&self, query: &FilterQuery) -> Vec<Issue> {
        filter::filter(&self.issues, query, &self.viewer)
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::of(&self.scoped())
    }

    /// Ranked candidates for an issue, counted against the whole collection.
    /// Empty for an unknown id.
    pub fn recommendations(&self, issue_id: &str) -> Vec<AssignmentCandidate> {
        self.issue(issue_id)
            .map(|issue| self.recommend_for(issue))
            .unwrap_or_default()
    }

    /// `Some` only when the viewer may assign this issue.
    pub fn assignment_menu(&self, issue_id: &str) -> Option<AssignmentMenu> {
        let issue = self.issue(issue_id)?;
        recommend::can_offer_assignment(&self.viewer, issue).then(|| AssignmentMenu {
            issue_id:   issue.id.clone(),
            candidates: self.recommend_for(issue),
        })
    }

    fn recommend_for(&self, issue: &Issue) -> Vec<AssignmentCandidate> {
        recommend::recommend(
            issue,
            &self.issues,
            &self.config.staff_directory,
            &self.config.keyword_routes,
            self.config.assignment_capacity,
        )
    }

    pub fn snapshot(&self, query: &FilterQuery) -> DeskSnapshot {
        let scoped = self.scoped();
        let visible = self.visible(query);
        let assignment_menus = visible
            .iter()
            .filter_map(|issue| self.assignment_menu(&issue.id))
            .collect();

        DeskSnapshot {
            viewer:        self.viewer.clone(),
            query:         query.clone(),
            counts:        StatusCounts::of(&scoped),
            high_priority: filter::high_priority_count(&scoped),
            categories:    filter::distinct_categories(&scoped),
            empty_state:   empty_state(&visible, query),
            map_center:    map_center(&visible),
            map_bounds:    map_bounds(&visible, DEFAULT_BOUNDS_PAD),
            assignment_menus,
            visible,
        }
    }

    /// Apply one command. Rejections and unknown ids are recorded, not errors.
    pub fn apply(&mut self, command: DeskCommand) -> DeskResult<Vec<DeskEvent>> {
        let events = match command {
            DeskCommand::Assign { issue_id, employee } => self.apply_assign(issue_id, employee),
            DeskCommand::SetStatus { issue_id, status } => self.apply_set_status(issue_id, status),
        };
        for event in &events {
            self.record(event)?;
        }
        Ok(events)
    }

    fn apply_assign(&mut self, issue_id: String, employee: String) -> Vec<DeskEvent> {
        let Some(issue) = self.issue(&issue_id) else {
            return vec![DeskEvent::UnknownIssue { issue_id }];
        };

        if let Some(reason) = self.assign_rejection(issue, &employee) {
            log::warn!("Rejected assignment of {issue_id} to '{employee}': {reason:?}");
            return vec![DeskEvent::AssignRejected { issue_id, employee, reason }];
        }

        self.issues = recommend::assign(&self.issues, &issue_id, &employee);
        let workload = recommend::workload(&self.issues, &employee);
        log::debug!("Assigned {issue_id} to {employee} ({workload}/{})", self.config.assignment_capacity);

        vec![DeskEvent::IssueAssigned {
            issue_id,
            employee,
            workload,
            capacity: self.config.assignment_capacity,
        }]
    }

    fn assign_rejection(&self, issue: &Issue, employee: &str) -> Option<RejectReason> {
        if !self.viewer.is_manager() {
            return Some(RejectReason::NotManager);
        }
        if issue.status != IssueStatus::Open {
            return Some(RejectReason::NotOpen);
        }
        if issue.is_assigned() {
            return Some(RejectReason::AlreadyAssigned);
        }
        if employee.trim().is_empty() {
            return Some(RejectReason::EmptyAssignee);
        }
        // Legacy labels are tolerated in loaded data, never written anew.
        if !self.config.knows_assignee(employee) {
            return Some(RejectReason::UnknownAssignee);
        }
        // At-capacity entries are shown in the menu but cannot be picked.
        let at_capacity = self
            .recommend_for(issue)
            .iter()
            .any(|c| c.name == employee && c.is_at_capacity());
        at_capacity.then_some(RejectReason::AtCapacity)
    }

    fn apply_set_status(&mut self, issue_id: String, status: IssueStatus) -> Vec<DeskEvent> {
        let Some(from) = self.issue(&issue_id).map(|i| i.status) else {
            return vec![DeskEvent::UnknownIssue { issue_id }];
        };
        self.issues = recommend::set_status(&self.issues, &issue_id, status);
        vec![DeskEvent::StatusChanged { issue_id, from, to: status }]
    }

    fn record(&mut self, event: &DeskEvent) -> DeskResult<()> {
        let entry = EventLogEntry {
            seq:        self.event_log.len() as u64 + 1,
            viewer:     self.viewer.name.clone(),
            event_type: event.type_name().to_string(),
            payload:    serde_json::to_string(event)?,
        };
        self.event_log.push(entry);
        Ok(())
    }
}
