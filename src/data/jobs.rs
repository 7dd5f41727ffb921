use serde::{Deserialize, Serialize};

/// A job history entry, listed most recent first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub company: String,
    pub title: String,
    /// Free-form range such as "2021 - present"
    pub dates: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

struct JobEntry {
    company: &'static str,
    title: &'static str,
    dates: &'static str,
    responsibilities: &'static [&'static str],
}

const JOBS: &[JobEntry] = &[
    JobEntry {
        company: "Freelance",
        title: "Full-stack Developer",
        dates: "2022 - present",
        responsibilities: &[
            "Building web applications with Next.js, Nest.js and PostgreSQL",
            "Automating content workflows with small Node.js tools",
            "Writing end-to-end tests with Cypress and unit tests with Vitest",
        ],
    },
    JobEntry {
        company: "Software house",
        title: "Frontend Developer",
        dates: "2020 - 2022",
        responsibilities: &[
            "Developing React interfaces backed by GraphQL APIs",
            "Maintaining component libraries and their Jest test suites",
        ],
    },
];

pub fn builtin_jobs() -> Vec<Job> {
    JOBS.iter()
        .map(|job| Job {
            company: job.company.to_string(),
            title: job.title.to_string(),
            dates: job.dates.to_string(),
            responsibilities: job.responsibilities.iter().map(|r| r.to_string()).collect(),
        })
        .collect()
}
