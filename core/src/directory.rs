//! Static lookup tables consumed by the assignment recommender.
//!
//! Both tables are ORDERED. Staff order is the tie-break when two
//! candidates carry the same workload; route order decides which
//! keyword wins when several appear in the same text.

use crate::types::Department;
use serde::{Deserialize, Serialize};

/// A recommended assignee. Capacity is shared by all staff and lives on
/// `DeskConfig`, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub role: String,
}

impl StaffMember {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self { name: name.into(), role: role.into() }
    }

    /// The label stored in `Issue::assigned_to`, e.g. "Rohan Kale (SWM Supervisor)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStaff {
    pub department: Department,
    pub staff:      Vec<StaffMember>,
}

/// department → ordered staff list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffDirectory {
    departments: Vec<DepartmentStaff>,
}

impl StaffDirectory {
    pub fn new(departments: Vec<DepartmentStaff>) -> Self {
        Self { departments }
    }

    /// `None` when the department has no entry. Exact, case-sensitive match.
    pub fn lookup(&self, department: &str) -> Option<&[StaffMember]> {
        self.departments
            .iter()
            .find(|d| d.department == department)
            .map(|d| d.staff.as_slice())
    }

    pub fn departments(&self) -> impl Iterator<Item = &str> {
        self.departments.iter().map(|d| d.department.as_str())
    }

    /// True if `label` is the "Name (Role)" label of any listed staff member.
    pub fn knows_label(&self, label: &str) -> bool {
        self.departments
            .iter()
            .flat_map(|d| d.staff.iter())
            .any(|m| m.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRoute {
    pub keyword:     String,
    pub departments: Vec<Department>,
}

/// Ordered keyword → department overrides. First match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<KeywordRoute>", into = "Vec<KeywordRoute>")]
pub struct KeywordRoutes {
    routes: Vec<KeywordRoute>,
}

impl KeywordRoutes {
    /// Keywords are lowercased on the way in; matching runs against
    /// lowercased text.
    pub fn new(routes: Vec<KeywordRoute>) -> Self {
        let routes = routes
            .into_iter()
            .map(|r| KeywordRoute { keyword: r.keyword.to_lowercase(), ..r })
            .collect();
        Self { routes }
    }

    /// Scan in table order and stop at the first keyword contained in
    /// `text`. Returns that route, even when it lists no department.
    pub fn first_match(&self, text: &str) -> Option<&KeywordRoute> {
        self.routes
            .iter()
            .find(|r| !r.keyword.is_empty() && text.contains(r.keyword.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordRoute> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl From<Vec<KeywordRoute>> for KeywordRoutes {
    fn from(routes: Vec<KeywordRoute>) -> Self {
        Self::new(routes)
    }
}

impl From<KeywordRoutes> for Vec<KeywordRoute> {
    fn from(routes: KeywordRoutes) -> Self {
        routes.routes
    }
}
