//! Assignment recommender tests: routing, candidate ranking, capacity.

use civic_desk_core::{
    config::DeskConfig,
    directory::{DepartmentStaff, StaffDirectory, StaffMember},
    issue::{Issue, IssueStatus},
    recommend::{assign, recommend, route_department},
};

fn names(candidates: &[civic_desk_core::recommend::AssignmentCandidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.name.as_str()).collect()
}

fn issue<'a>(issues: &'a [Issue], id: &str) -> &'a Issue {
    issues.iter().find(|i| i.id == id).expect("seed issue")
}

fn recommend_seed(config: &DeskConfig, issues: &[Issue], id: &str) -> Vec<civic_desk_core::recommend::AssignmentCandidate> {
    recommend(
        issue(issues, id),
        issues,
        &config.staff_directory,
        &config.keyword_routes,
        config.assignment_capacity,
    )
}

/// "garbage" routes ISS-001 to Solid Waste; all three SWM staff are offered.
#[test]
fn garbage_routes_to_solid_waste() {
    let config = DeskConfig::builtin();
    let issues = config.issues.clone();

    assert_eq!(
        route_department(issue(&issues, "ISS-001"), &config.keyword_routes),
        "Solid Waste Management Department"
    );

    let candidates = recommend_seed(&config, &issues, "ISS-001");
    assert_eq!(
        names(&candidates),
        [
            "Rohan Kale (SWM Supervisor)",
            "Meera Joshi (Sanitation Lead)",
            "Vikas Patil (Collection In-charge)",
        ]
    );
    assert!(candidates.iter().all(|c| c.current_count == 0 && c.capacity == 5));
}

/// A keyword in the description overrides the issue's own category.
#[test]
fn water_keyword_overrides_category() {
    let config = DeskConfig::builtin();
    let mut custom = config.issues[3].clone();
    custom.id = "ISS-900".into();
    custom.title = "Puddle on the junction".into();
    custom.description = "Stagnant water pooling since Monday.".into();
    custom.category = "Public Works Department (PWD)".into();

    assert_eq!(
        route_department(&custom, &config.keyword_routes),
        "Water Works Department"
    );
    let candidates = recommend(
        &custom,
        &config.issues,
        &config.staff_directory,
        &config.keyword_routes,
        config.assignment_capacity,
    );
    assert_eq!(
        names(&candidates),
        ["Mohit Deshmukh (Pipeline Technician)", "Priya Kulkarni (Maintenance Engineer)"]
    );
}

/// Table order decides, not specificity: "road" is listed ahead of
/// "streetlight", so the Baner Road streetlight goes to Public Works.
#[test]
fn first_keyword_in_table_order_wins() {
    let config = DeskConfig::builtin();
    let issues = config.issues.clone();
    assert_eq!(
        route_department(issue(&issues, "ISS-007"), &config.keyword_routes),
        "Public Works Department (PWD)"
    );
    assert_eq!(
        route_department(issue(&issues, "ISS-005"), &config.keyword_routes),
        "Municipal Corporation Electrical Department"
    );
}

/// No keyword in the text: the category is the routing target.
#[test]
fn no_keyword_falls_back_to_category() {
    let config = DeskConfig::builtin();
    let issues = config.issues.clone();
    assert_eq!(
        route_department(issue(&issues, "ISS-006"), &config.keyword_routes),
        "Solid Waste Management Department"
    );
}

/// A department with no directory entry yields no candidates, not an error.
#[test]
fn unknown_department_has_no_candidates() {
    let config = DeskConfig::builtin();
    let mut custom = config.issues[5].clone();
    custom.id = "ISS-901".into();
    custom.title = "Fallen tree branch".into();
    custom.description = "Branch blocking the footpath near the park gate.".into();
    custom.category = "Parks & Gardens Department".into();

    let candidates = recommend(
        &custom,
        &config.issues,
        &config.staff_directory,
        &config.keyword_routes,
        config.assignment_capacity,
    );
    assert!(candidates.is_empty(), "expected no candidates, got {candidates:?}");
}

/// Existing assignments push a candidate down; ties keep directory order.
#[test]
fn busier_staff_sort_last() {
    let config = DeskConfig::builtin();
    let issues = assign(&config.issues, "ISS-001", "Rohan Kale (SWM Supervisor)");

    let candidates = recommend_seed(&config, &issues, "ISS-006");
    assert_eq!(
        names(&candidates),
        [
            "Meera Joshi (Sanitation Lead)",
            "Vikas Patil (Collection In-charge)",
            "Rohan Kale (SWM Supervisor)",
        ]
    );
    assert_eq!(candidates[2].current_count, 1);
    for pair in candidates.windows(2) {
        assert!(pair[0].current_count <= pair[1].current_count);
    }
}

/// Workload counts the whole collection, whatever the issue's status.
#[test]
fn workload_counts_every_status() {
    let config = DeskConfig::builtin();
    let meera = "Meera Joshi (Sanitation Lead)";
    let mut issues = config.issues.clone();
    for n in 0..5 {
        let mut extra = config.issues[5].clone();
        extra.id = format!("ISS-1{n:02}");
        extra.status = if n % 2 == 0 { IssueStatus::Completed } else { IssueStatus::InProgress };
        extra.assigned_to = meera.into();
        issues.push(extra);
    }

    let candidates = recommend_seed(&config, &issues, "ISS-001");
    let last = candidates.last().unwrap();
    assert_eq!(last.name, meera);
    assert_eq!(last.current_count, 5);
    assert!(last.is_at_capacity(), "5/5 should be at capacity");
    assert_eq!(candidates.len(), 3, "at-capacity staff stay in the list");
    assert!(!candidates[0].is_at_capacity());
}

/// A name+role pair listed twice collapses into one candidate.
#[test]
fn duplicate_staff_labels_collapse() {
    let config = DeskConfig::builtin();
    let directory = StaffDirectory::new(vec![DepartmentStaff {
        department: "Solid Waste Management Department".into(),
        staff: vec![
            StaffMember::new("Rohan Kale", "SWM Supervisor"),
            StaffMember::new("Rohan Kale", "SWM Supervisor"),
            StaffMember::new("Rohan Kale", "Night Shift Lead"),
        ],
    }]);

    let candidates = recommend(
        issue(&config.issues, "ISS-001"),
        &config.issues,
        &directory,
        &config.keyword_routes,
        config.assignment_capacity,
    );
    assert_eq!(
        names(&candidates),
        ["Rohan Kale (SWM Supervisor)", "Rohan Kale (Night Shift Lead)"]
    );
}

/// Same inputs, same output.
#[test]
fn recommend_is_repeatable() {
    let config = DeskConfig::builtin();
    let issues = assign(&config.issues, "ISS-003", "Mohit Deshmukh (Pipeline Technician)");
    for issue in &issues {
        let a = recommend(issue, &issues, &config.staff_directory, &config.keyword_routes, 5);
        let b = recommend(issue, &issues, &config.staff_directory, &config.keyword_routes, 5);
        assert_eq!(a, b, "recommend diverged for {}", issue.id);
    }
}
