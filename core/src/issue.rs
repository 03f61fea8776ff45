//! The issue record: a reported civic problem.
//!
//! Issues are seeded once at startup. At runtime only `assigned_to` and
//! `status` change, and only by replacing the whole collection
//! (see `recommend::assign` and `recommend::set_status`).

use crate::types::IssueId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id:           IssueId,
    pub title:        String,
    pub category:     String,
    pub status:       IssueStatus,
    pub priority:     Priority,
    /// Staff label or user name; empty when unassigned.
    #[serde(default)]
    pub assigned_to:  String,
    pub submitted_by: String,
    pub description:  String,
    pub location:     String,
    pub reported_on:  NaiveDate,
    pub coordinates:  Coordinates,
    #[serde(default)]
    pub media:        MediaAttachments,
}

impl Issue {
    pub fn is_assigned(&self) -> bool {
        !self.assigned_to.is_empty()
    }

    /// Text the keyword router scans: title and description, lowercased.
    pub fn routing_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// Lifecycle position. No transition rules are enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 3] = [
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IssueStatus::Open       => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Completed  => "Completed",
        }
    }

    /// Case-insensitive inverse of `label()`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low      => "Low",
            Priority::Medium   => "Medium",
            Priority::High     => "High",
            Priority::Critical => "Critical",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label.trim()))
    }

    /// High and Critical count toward the "high priority" tally.
    pub fn is_high(self) -> bool {
        matches!(self, Priority::High | Priority::Critical)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Paths to evidence uploaded with the report. Opaque to the core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}
