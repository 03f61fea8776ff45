use crate::{
    directory::{KeywordRoutes, StaffDirectory},
    error::{DeskError, DeskResult},
    identity::UserDirectory,
    issue::Issue,
    seed,
    types::DEFAULT_CAPACITY,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    pub issues:              Vec<Issue>,
    pub users:               UserDirectory,
    pub staff_directory:     StaffDirectory,
    pub keyword_routes:      KeywordRoutes,
    pub assignment_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct DeskSettingsFile {
    #[serde(default = "default_capacity")]
    assignment_capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl DeskConfig {
    /// Load from the data/ directory.
    /// In tests, use DeskConfig::builtin().
    pub fn load(data_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = data_dir.as_ref();

        let issues: Vec<Issue> = read_json(&dir.join("issues.json"))?;
        let users: UserDirectory = read_json(&dir.join("users.json"))?;
        let staff_directory: StaffDirectory = read_json(&dir.join("staff_directory.json"))?;
        let keyword_routes: KeywordRoutes = read_json(&dir.join("keyword_routes.json"))?;

        // desk.json is optional; capacity falls back to the default.
        let settings_path = dir.join("desk.json");
        let assignment_capacity = if settings_path.exists() {
            read_json::<DeskSettingsFile>(&settings_path)?.assignment_capacity
        } else {
            DEFAULT_CAPACITY
        };

        let config = Self {
            issues,
            users,
            staff_directory,
            keyword_routes,
            assignment_capacity,
        };
        config.validate()?;
        log::info!(
            "Loaded desk config from {}: {} issues, {} keyword routes, capacity {}",
            dir.display(),
            config.issues.len(),
            config.keyword_routes.len(),
            config.assignment_capacity,
        );
        Ok(config)
    }

    /// The shipped seed, without touching the filesystem.
    pub fn builtin() -> Self {
        Self {
            issues:              seed::issues(),
            users:               seed::users(),
            staff_directory:     seed::staff_directory(),
            keyword_routes:      seed::keyword_routes(),
            assignment_capacity: DEFAULT_CAPACITY,
        }
    }

    /// Duplicate issue ids and blank keywords are fatal. Assignees nobody
    /// knows are only logged: the shipped seed carries one.
    pub fn validate(&self) -> DeskResult<()> {
        let mut seen = HashSet::new();
        for issue in &self.issues {
            if !seen.insert(issue.id.as_str()) {
                return Err(DeskError::DuplicateIssueId { id: issue.id.clone() });
            }
            if issue.is_assigned() && !self.knows_assignee(&issue.assigned_to) {
                log::warn!(
                    "Issue {} is assigned to '{}', who is in neither directory",
                    issue.id,
                    issue.assigned_to
                );
            }
        }
        for (position, route) in self.keyword_routes.iter().enumerate() {
            // A blank keyword would be contained in every text.
            if route.keyword.trim().is_empty() {
                return Err(DeskError::BlankKeyword { position });
            }
            let target = route.departments.first();
            if !target.is_some_and(|d| self.staff_directory.departments().any(|known| known == d)) {
                log::warn!(
                    "Keyword '{}' routes to {:?}, which has no staff entry",
                    route.keyword,
                    target
                );
            }
        }
        Ok(())
    }

    /// Staff label or user display name.
    pub fn knows_assignee(&self, assignee: &str) -> bool {
        self.staff_directory.knows_label(assignee) || self.users.by_name(assignee).is_some()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))
}
