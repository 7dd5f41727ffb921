use serde::{Deserialize, Serialize};

/// A skill badge on the about page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Icon name, resolved to `/static/icons/<icon>.svg`
    pub icon: String,
}

const SKILLS: &[(&str, &str)] = &[
    ("Typescript", "typescript"),
    ("Javascript", "javascript"),
    ("Node.js", "nodedotjs"),
    ("Next.js", "nextdotjs"),
    ("React", "react"),
    ("Prisma", "prisma"),
    ("Nest.js", "nestjs"),
    ("Express", "express"),
    ("GraphQL", "graphql"),
    ("Docker", "docker"),
    ("MongoDB", "mongodb"),
    ("PostgreSQL", "postgresql"),
    ("Vitest", "vitest"),
    ("Cypress", "cypress"),
    ("Jest", "jest"),
    ("Git", "git"),
];

pub fn builtin_skills() -> Vec<Skill> {
    SKILLS
        .iter()
        .map(|(name, icon)| Skill {
            name: name.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}
