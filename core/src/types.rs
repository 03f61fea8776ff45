//! Shared primitive types used across the desk.

/// A stable, unique identifier for an issue ("ISS-001").
pub type IssueId = String;

/// A department name. Doubles as an issue category and as a routing target.
pub type Department = String;

/// Maximum concurrent assignments per staff member.
/// Flags overloaded candidates; it never blocks an assignment.
pub const DEFAULT_CAPACITY: usize = 5;

/// The five municipal departments, in canonical order.
pub const DEPARTMENTS: [&str; 5] = [
    "Solid Waste Management Department",
    "Health & Sanitation Department",
    "Water Works Department",
    "Public Works Department (PWD)",
    "Municipal Corporation Electrical Department",
];
