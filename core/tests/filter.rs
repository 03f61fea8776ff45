//! Filter engine tests: scope, search, categorical filters, aggregates.

use civic_desk_core::{
    config::DeskConfig,
    filter::{
        distinct_categories, empty_state, filter, high_priority_count, EmptyState, FilterQuery,
        SearchFields, StatusCounts,
    },
    identity::{Role, Viewer},
    issue::{Issue, IssueStatus, Priority},
};

fn seed() -> Vec<Issue> {
    DeskConfig::builtin().issues
}

fn manager() -> Viewer {
    Viewer::new("John Manager", Role::Manager, "Public Works Department (PWD)")
}

fn mike() -> Viewer {
    Viewer::new("Mike Employee", Role::Employee, "Municipal Corporation Electrical Department")
}

fn ids(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.id.as_str()).collect()
}

/// The seed holds seven Open issues; the status filter returns exactly those.
#[test]
fn status_open_on_seed() {
    let result = filter(&seed(), &FilterQuery::new().status(IssueStatus::Open), &manager());
    assert_eq!(
        ids(&result),
        ["ISS-001", "ISS-003", "ISS-005", "ISS-006", "ISS-007", "ISS-009", "ISS-010"]
    );
    assert!(result.iter().all(|i| i.status == IssueStatus::Open));
}

/// Search is a case-insensitive substring match on title and description.
#[test]
fn search_pothole_ignores_case() {
    let lower = filter(&seed(), &FilterQuery::new().search("pothole"), &manager());
    let upper = filter(&seed(), &FilterQuery::new().search("POTHOLE"), &manager());
    assert_eq!(ids(&lower), ["ISS-004", "ISS-010"]);
    assert_eq!(lower, upper);
    assert!(lower.iter().any(|i| i.title == "Potholes across intersection"));
}

/// The full list view also searches the submitter and assignee.
#[test]
fn full_search_covers_submitter_and_assignee() {
    let by_submitter = filter(&seed(), &FilterQuery::new().search("resident"), &manager());
    assert_eq!(ids(&by_submitter), ["ISS-001", "ISS-005", "ISS-007"]);

    let by_assignee = filter(&seed(), &FilterQuery::new().search("mike"), &manager());
    assert_eq!(ids(&by_assignee), ["ISS-005", "ISS-007"]);
}

/// The per-employee view does not match on assignee or submitter.
#[test]
fn personal_search_skips_people_fields() {
    let query = FilterQuery::new().search("mike").fields(SearchFields::Personal);
    assert!(filter(&seed(), &query, &mike()).is_empty());

    let query = FilterQuery::new().search("streetlight").fields(SearchFields::Personal);
    assert_eq!(ids(&filter(&seed(), &query, &mike())), ["ISS-005", "ISS-007"]);
}

/// Category names are searchable too.
#[test]
fn search_matches_category() {
    let result = filter(&seed(), &FilterQuery::new().search("water works"), &manager());
    assert_eq!(ids(&result), ["ISS-003", "ISS-008"]);
}

/// Employees only see issues assigned to their own display name.
#[test]
fn employee_scope_is_own_issues() {
    let result = filter(&seed(), &FilterQuery::new(), &mike());
    assert_eq!(ids(&result), ["ISS-005", "ISS-007"]);
    assert!(result.iter().all(|i| i.assigned_to == "Mike Employee"));
}

/// Managers see the whole collection in its original order.
#[test]
fn manager_scope_is_everything() {
    let issues = seed();
    let result = filter(&issues, &FilterQuery::new(), &manager());
    assert_eq!(result, issues);
}

/// Filters combine with AND.
#[test]
fn filters_are_conjunctive() {
    let query = FilterQuery::new()
        .status(IssueStatus::Open)
        .priority(Priority::High);
    assert_eq!(ids(&filter(&seed(), &query, &manager())), ["ISS-001", "ISS-010"]);

    let query = FilterQuery::new()
        .status(IssueStatus::Open)
        .category("Public Works Department (PWD)");
    assert_eq!(ids(&filter(&seed(), &query, &manager())), ["ISS-010"]);

    let query = FilterQuery::new()
        .search("water")
        .status(IssueStatus::InProgress);
    assert_eq!(ids(&filter(&seed(), &query, &manager())), ["ISS-008"]);
}

/// Category is an exact match, not a substring.
#[test]
fn category_filter_is_exact() {
    let result = filter(&seed(), &FilterQuery::new().category("Water Works"), &manager());
    assert!(result.is_empty(), "partial category name should not match");
}

/// An empty search term is no filter at all.
#[test]
fn empty_search_is_inactive() {
    let query = FilterQuery::new().search("");
    assert!(!query.is_active());
    assert_eq!(filter(&seed(), &query, &manager()).len(), 10);
}

/// Dropdown labels parse with "all" meaning no restriction.
#[test]
fn from_labels_parses_dropdowns() {
    let query = FilterQuery::from_labels("", "In Progress", "all", "all").unwrap();
    assert_eq!(query.status, Some(IssueStatus::InProgress));
    assert_eq!(query.priority, None);
    assert_eq!(query.category, None);
    assert_eq!(query.search, None);

    let query = FilterQuery::from_labels("bin", "ALL", "critical", "Water Works Department").unwrap();
    assert_eq!(query.search.as_deref(), Some("bin"));
    assert_eq!(query.status, None);
    assert_eq!(query.priority, Some(Priority::Critical));
    assert_eq!(query.category.as_deref(), Some("Water Works Department"));
}

/// Unknown dropdown labels are reported, not silently ignored.
#[test]
fn from_labels_rejects_unknown_status() {
    let err = FilterQuery::from_labels("", "Closed", "all", "all").unwrap_err();
    assert!(err.to_string().contains("Closed"), "unexpected error: {err}");
}

/// Counts by status, the high-priority tally, and first-seen category order.
#[test]
fn aggregates_over_seed() {
    let issues = seed();
    let counts = StatusCounts::of(&issues);
    assert_eq!(counts.total, 10);
    assert_eq!(counts.open, 7);
    assert_eq!(counts.in_progress, 3);
    assert_eq!(counts.completed, 0);

    assert_eq!(high_priority_count(&issues), 5);

    assert_eq!(
        distinct_categories(&issues),
        [
            "Solid Waste Management Department",
            "Health & Sanitation Department",
            "Water Works Department",
            "Public Works Department (PWD)",
            "Municipal Corporation Electrical Department",
        ]
    );
}

/// An empty result is a value; the empty-state hint depends on active filters.
#[test]
fn empty_results_pick_the_right_hint() {
    let query = FilterQuery::new().search("zzz-no-such-thing");
    let result = filter(&seed(), &query, &manager());
    assert!(result.is_empty());
    assert_eq!(empty_state(&result, &query), Some(EmptyState::NoMatches));

    let lisa = Viewer::new("Lisa Worker", Role::Employee, "Health & Sanitation Department");
    let query = FilterQuery::new();
    let result = filter(&seed(), &query, &lisa);
    assert!(result.is_empty(), "Lisa has no assigned issues in the seed");
    assert_eq!(empty_state(&result, &query), Some(EmptyState::NoIssues));

    let all = filter(&seed(), &query, &manager());
    assert_eq!(empty_state(&all, &query), None);
}

/// A query arriving as JSON without `fields` is pinned to the viewer's role.
#[test]
fn deserialized_query_takes_viewer_search_fields() {
    let query: FilterQuery = serde_json::from_str(r#"{"search":"resident"}"#).unwrap();
    assert_eq!(query.fields, SearchFields::Full);

    let full = filter(&seed(), &query, &mike());
    assert_eq!(ids(&full), ["ISS-005", "ISS-007"], "submitter matched");

    let pinned = query.clone().for_viewer(&mike());
    assert_eq!(pinned.fields, SearchFields::Personal);
    assert!(filter(&seed(), &pinned, &mike()).is_empty());

    assert_eq!(query.for_viewer(&manager()).fields, SearchFields::Full);
}
