use super::components::{social_icon, SocialKind};
use super::{join, RenderContext};
use crate::config::SiteConfig;
use crate::content::AuthorProfile;
use crate::data::{Job, Skill};
use crate::helpers::{html_escape, image_tag, url_for};

/// One list item per skill, in order
pub fn skill_items(config: &SiteConfig, skills: &[Skill]) -> Vec<String> {
    skills
        .iter()
        .map(|skill| {
            let icon = url_for(config, &format!("/static/icons/{}.svg", skill.icon));
            format!(
                concat!(
                    r#"<li class="skill"><div class="skill-card">"#,
                    r#"<img src="{icon}" alt="" class="skill-icon">"#,
                    r#"<p class="skill-name">{name}</p>"#,
                    "</div></li>",
                ),
                icon = html_escape(&icon),
                name = html_escape(&skill.name),
            )
        })
        .collect()
}

/// One list item per job, in order, each with its responsibilities in order
pub fn job_items(jobs: &[Job]) -> Vec<String> {
    jobs.iter()
        .map(|job| {
            let responsibilities = if job.responsibilities.is_empty() {
                String::new()
            } else {
                let items: String = job
                    .responsibilities
                    .iter()
                    .map(|r| format!("<li>{}</li>", html_escape(r)))
                    .collect();
                format!(r#"<ul class="job-responsibilities">{}</ul>"#, items)
            };

            format!(
                concat!(
                    r#"<li class="job">"#,
                    r#"<h3 class="job-title">{title}</h3>"#,
                    r#"<p class="job-company">{company}</p>"#,
                    r#"<p class="job-dates">{dates}</p>"#,
                    "{responsibilities}",
                    "</li>",
                ),
                title = html_escape(&job.title),
                company = html_escape(&job.company),
                dates = html_escape(&job.dates),
                responsibilities = responsibilities,
            )
        })
        .collect()
}

fn author_card(config: &SiteConfig, author: &AuthorProfile) -> String {
    let mail = if author.email.is_empty() {
        String::new()
    } else {
        format!("mailto:{}", author.email)
    };
    let icons: String = [
        (SocialKind::Mail, mail.as_str()),
        (SocialKind::Github, author.github.as_str()),
        (SocialKind::Linkedin, author.linkedin.as_str()),
        (SocialKind::Twitter, author.twitter.as_str()),
    ]
    .into_iter()
    .filter_map(|(kind, href)| social_icon(config, kind, href, 8))
    .collect();

    let avatar = if author.avatar.is_empty() {
        String::new()
    } else {
        image_tag(config, &author.avatar, "avatar", Some("avatar"))
    };

    format!(
        concat!(
            r#"<div class="author-card">{avatar}"#,
            "<h3>{name}</h3>",
            r#"<div class="author-occupation">{occupation}</div>"#,
            r#"<div class="author-company">{company}</div>"#,
            r#"<div class="author-icons">{icons}</div>"#,
            "</div>",
        ),
        avatar = avatar,
        name = html_escape(&author.name),
        occupation = html_escape(&author.occupation),
        company = html_escape(&author.company),
        icons = icons,
    )
}

/// About page body: author card, bio, skills and job history
pub fn about(ctx: &RenderContext, author: &AuthorProfile, skills: &[Skill], jobs: &[Job]) -> String {
    format!(
        concat!(
            r#"<div class="about">"#,
            "<h1>{heading}</h1>",
            r#"<div class="about-grid">{card}<div class="about-content">"#,
            "<section>{bio}</section>",
            r#"<section><h2>🛠️ {skills_heading}</h2><ul class="skills">{skills}</ul></section>"#,
            r#"<section><h2>💼 {jobs_heading}</h2><ul class="jobs">{jobs}</ul></section>"#,
            "</div></div></div>",
        ),
        heading = html_escape(&ctx.t("about.heading")),
        card = author_card(ctx.config, author),
        bio = author.bio,
        skills_heading = html_escape(&ctx.t("about.skills")),
        skills = join(skill_items(ctx.config, skills)),
        jobs_heading = html_escape(&ctx.t("about.experience")),
        jobs = join(job_items(jobs)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{builtin_jobs, builtin_skills};
    use crate::i18n::I18n;
    use crate::templates::test_support::config;

    fn job(company: &str, responsibilities: &[&str]) -> Job {
        Job {
            company: company.to_string(),
            title: "Engineer".to_string(),
            dates: "2020 - 2021".to_string(),
            responsibilities: responsibilities.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_skill_items_one_per_record_in_order() {
        let config = config();
        let skills = builtin_skills();
        let items = skill_items(&config, &skills);
        assert_eq!(items.len(), skills.len());
        for (item, skill) in items.iter().zip(&skills) {
            assert!(item.contains(&format!(">{}</p>", html_escape(&skill.name))));
            assert!(item.contains(&format!("/static/icons/{}.svg", skill.icon)));
        }
        assert!(skill_items(&config, &[]).is_empty());
    }

    #[test]
    fn test_job_items_one_per_record_in_order() {
        let jobs = vec![job("Acme", &["Build", "Ship"]), job("Initech", &[])];
        let items = job_items(&jobs);
        assert_eq!(items.len(), 2);
        assert!(items[0].contains("Acme"));
        assert!(items[0].find("<li>Build</li>").unwrap() < items[0].find("<li>Ship</li>").unwrap());
        assert!(items[1].contains("Initech"));
        assert!(!items[1].contains("job-responsibilities"));
        assert!(job_items(&[]).is_empty());
    }

    #[test]
    fn test_about_page() {
        let config = config();
        let i18n = I18n::new("en");
        let ctx = RenderContext::new(&config, &i18n, 2024);
        let author = AuthorProfile {
            name: "Jane Doe".to_string(),
            occupation: "Developer".to_string(),
            email: "jane@example.com".to_string(),
            github: "https://github.com/jane".to_string(),
            bio: "<p>Hello <em>there</em></p>".to_string(),
            ..Default::default()
        };
        let skills = builtin_skills();
        let jobs = builtin_jobs();

        let html = about(&ctx, &author, &skills, &jobs);
        assert!(html.contains("<h1>About me</h1>"));
        assert!(html.contains("<h3>Jane Doe</h3>"));
        assert!(html.contains("<p>Hello <em>there</em></p>"));
        assert_eq!(html.matches(r#"<li class="skill">"#).count(), skills.len());
        assert_eq!(html.matches(r#"<li class="job">"#).count(), jobs.len());
        assert_eq!(html.matches(r#"class="social-link""#).count(), 2);
        assert!(!html.contains("<img src=\"\""));
    }
}
