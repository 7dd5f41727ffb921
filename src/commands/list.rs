//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::loader::ContentLoader;
use crate::content::tag_counts;
use crate::data::SiteData;
use crate::Site;

/// List site content by type to stdout
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_listing(site, content_type, &mut out)
}

/// List site content by type
pub fn write_listing<W: Write>(site: &Site, content_type: &str, out: &mut W) -> Result<()> {
    let loader = ContentLoader::new(site);

    match content_type {
        "post" | "posts" => {
            let posts = loader.load_posts()?;
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.slug
                )?;
            }
        }
        "tag" | "tags" => {
            let posts = loader.load_posts()?;
            let tags = tag_counts(&posts);
            writeln!(out, "Tags ({}):", tags.len())?;
            for (tag, count) in tags {
                writeln!(out, "  {} ({})", tag, count)?;
            }
        }
        "skill" | "skills" => {
            let data = SiteData::load(&site.base_dir)?;
            writeln!(out, "Skills ({}):", data.skills.len())?;
            for skill in data.skills {
                writeln!(out, "  {} [{}]", skill.name, skill.icon)?;
            }
        }
        "job" | "jobs" => {
            let data = SiteData::load(&site.base_dir)?;
            writeln!(out, "Jobs ({}):", data.jobs.len())?;
            for job in data.jobs {
                writeln!(out, "  {} - {} ({})", job.company, job.title, job.dates)?;
            }
        }
        "project" | "projects" => {
            let data = SiteData::load(&site.base_dir)?;
            writeln!(out, "Projects ({}):", data.projects.len())?;
            for project in data.projects {
                writeln!(out, "  {} [{}]", project.title, project.href)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, skill, job, project",
                content_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(
            dir.path().join("content/posts.yml"),
            r#"
- {slug: a, title: First, date: 2024-01-01, tags: [rust]}
- {slug: b, title: Second, date: 2024-01-02, tags: [rust, web]}
"#,
        )
        .unwrap();
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    fn listing(site: &Site, kind: &str) -> String {
        let mut out = Vec::new();
        write_listing(site, kind, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_posts_newest_first() {
        let (_dir, site) = site();
        assert_eq!(
            listing(&site, "post"),
            "Posts (2):\n  2024-01-02 - Second [b]\n  2024-01-01 - First [a]\n"
        );
    }

    #[test]
    fn test_list_tags() {
        let (_dir, site) = site();
        assert_eq!(listing(&site, "tags"), "Tags (2):\n  rust (2)\n  web (1)\n");
    }

    #[test]
    fn test_list_skills() {
        let (_dir, site) = site();
        let out = listing(&site, "skills");
        assert!(out.starts_with("Skills (16):\n  Typescript [typescript]\n"));
    }

    #[test]
    fn test_unknown_type() {
        let (_dir, site) = site();
        let mut out = Vec::new();
        assert!(write_listing(&site, "category", &mut out).is_err());
    }
}
