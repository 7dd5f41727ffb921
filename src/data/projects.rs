use serde::{Deserialize, Serialize};

/// A portfolio project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub img_src: String,
    #[serde(default)]
    pub href: String,
}

pub fn builtin_projects() -> Vec<Project> {
    vec![Project {
        title: "Anki Card Generator".to_string(),
        description: "This project provides a convenient solution for users who want to \
            create Anki flashcards without having to manually type in questions and answers. \
            By leveraging the power of ChatGPT and Anki, this app makes it easy for users to \
            study and retain information."
            .to_string(),
        img_src: "/static/images/ankigenerator.png".to_string(),
        href: "https://ankigenerator.vercel.app".to_string(),
    }]
}
