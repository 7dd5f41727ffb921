//! Static site data: skills, job history and projects
//!
//! The built-in tables can be replaced list by list from `_data.yml` in the
//! site root.

mod jobs;
mod projects;
mod skills;

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

pub use jobs::{builtin_jobs, Job};
pub use projects::{builtin_projects, Project};
pub use skills::{builtin_skills, Skill};

use crate::content::loader::read_records;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteData {
    pub skills: Vec<Skill>,
    pub jobs: Vec<Job>,
    pub projects: Vec<Project>,
}

impl Default for SiteData {
    fn default() -> Self {
        Self {
            skills: builtin_skills(),
            jobs: builtin_jobs(),
            projects: builtin_projects(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DataOverrides {
    skills: Option<Vec<Skill>>,
    jobs: Option<Vec<Job>>,
    projects: Option<Vec<Project>>,
}

impl SiteData {
    /// Built-in data with any lists present in `<base_dir>/_data.yml` swapped in
    pub fn load<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let mut data = Self::default();

        let path = base_dir.as_ref().join("_data.yml");
        if !path.exists() {
            return Ok(data);
        }

        let overrides: DataOverrides = read_records(&path)?;
        if let Some(skills) = overrides.skills {
            data.skills = skills;
        }
        if let Some(jobs) = overrides.jobs {
            data.jobs = jobs;
        }
        if let Some(projects) = overrides.projects {
            data.projects = projects;
        }
        tracing::debug!("Loaded data overrides from {:?}", path);

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_tables() {
        let data = SiteData::default();
        assert_eq!(data.skills.len(), 16);
        assert_eq!(data.skills[0].name, "Typescript");
        assert_eq!(data.skills[15].icon, "git");
        assert!(!data.jobs.is_empty());
        assert_eq!(data.projects[0].title, "Anki Card Generator");
    }

    #[test]
    fn test_partial_override() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_data.yml"),
            r#"
skills:
  - {name: Rust, icon: rust}
jobs: []
"#,
        )
        .unwrap();

        let data = SiteData::load(dir.path()).unwrap();
        assert_eq!(data.skills.len(), 1);
        assert_eq!(data.skills[0].name, "Rust");
        assert!(data.jobs.is_empty());
        assert_eq!(data.projects, builtin_projects());
    }
}
