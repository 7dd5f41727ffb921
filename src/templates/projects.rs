use super::{join, RenderContext};
use crate::config::SiteConfig;
use crate::data::Project;
use crate::helpers::{html_escape, image_tag, link_to};

/// One card per project, in order
pub fn project_cards(config: &SiteConfig, projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .map(|project| {
            let title = html_escape(&project.title);
            let image = if project.img_src.is_empty() {
                String::new()
            } else {
                image_tag(config, &project.img_src, &project.title, Some("project-image"))
            };
            let (image, heading) = if project.href.is_empty() {
                (image, title)
            } else {
                let label = format!("Link to {}", project.title);
                (
                    if image.is_empty() {
                        image
                    } else {
                        link_to(config, &project.href, &image, &[("aria-label", label.as_str())])
                    },
                    link_to(config, &project.href, &title, &[("aria-label", label.as_str())]),
                )
            };

            format!(
                concat!(
                    r#"<div class="project-card">{image}"#,
                    r#"<div class="project-body"><h2>{heading}</h2>"#,
                    r#"<p class="project-description">{description}</p></div>"#,
                    "</div>",
                ),
                image = image,
                heading = heading,
                description = html_escape(&project.description),
            )
        })
        .collect()
}

/// Projects page body
pub fn projects(ctx: &RenderContext, projects: &[Project]) -> String {
    format!(
        r#"<div class="projects"><h1>{}</h1><div class="project-grid">{}</div></div>"#,
        html_escape(&ctx.t("projects.heading")),
        join(project_cards(ctx.config, projects))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_projects;
    use crate::templates::test_support::config;

    #[test]
    fn test_project_cards() {
        let config = config();
        let mut projects = builtin_projects();
        projects.push(Project {
            title: "Offline tool".to_string(),
            description: "No link".to_string(),
            img_src: String::new(),
            href: String::new(),
        });

        let cards = project_cards(&config, &projects);
        assert_eq!(cards.len(), 2);
        assert!(cards[0].contains(r#"href="https://ankigenerator.vercel.app""#));
        assert!(cards[0].contains(r#"src="/static/images/ankigenerator.png""#));
        assert!(cards[1].contains("<h2>Offline tool</h2>"));
        assert!(!cards[1].contains("<img"));
    }
}
