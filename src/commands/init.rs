//! Initialize a new site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Site
title: My Blog
author: John Doe
header_title: ''
description: ''
language: en
locale: en-US
site_url: http://example.com
site_repo: ''
site_logo: /static/images/avatar.png

# Contact (leave empty to hide the icon)
email: ''
github: ''
facebook: ''
youtube: ''
linkedin: ''
twitter: ''

# Integrations
analytics:
  plausible_data_domain: ''
  google_analytics_id: ''
comments:
  provider: giscus
  giscus:
    mapping: pathname
    reactions: '1'
    metadata: '0'
    theme: light
    dark_theme: transparent_dark
    lang: en

# Build
root: /
content_dir: content
static_dir: static
public_dir: public
language_dir: languages
max_display: 3
render_drafts: false
nav:
  - { name: blog, path: /blog }
  - { name: projects, path: /projects }
  - { name: about, path: /about }
"#;

const AUTHOR_TEMPLATE: &str = r#"name: John Doe
avatar: /static/images/avatar.png
occupation: Software Developer
company: ''
email: ''
twitter: ''
linkedin: ''
github: ''
bio: |
  <p>Write a few words about yourself here.</p>
"#;

const STYLESHEET: &str = r#"body { font-family: system-ui, sans-serif; margin: 0; }
.container { max-width: 48rem; margin: 0 auto; padding: 0 1rem; }
.site-header { display: flex; justify-content: space-between; padding: 2.5rem 0; }
.nav-link { margin-left: 1rem; }
.post-list { list-style: none; padding: 0; }
.post-item { padding: 3rem 0; border-top: 1px solid #e5e7eb; }
.tag { margin-right: 0.75rem; text-transform: uppercase; font-size: 0.875rem; }
.skills, .jobs { list-style: none; padding: 0; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0, 0, 0, 0); }
.site-footer { display: flex; flex-direction: column; align-items: center; margin-top: 4rem; }
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        bail!("{:?} already contains a site", target_dir);
    }

    // Create directory structure
    fs::create_dir_all(target_dir.join("content"))?;
    fs::create_dir_all(target_dir.join("static/css"))?;
    fs::create_dir_all(target_dir.join("static/icons/social"))?;
    fs::create_dir_all(target_dir.join("static/images"))?;
    fs::create_dir_all(target_dir.join("languages"))?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    fs::write(target_dir.join("content/author.yml"), AUTHOR_TEMPLATE)?;
    fs::write(target_dir.join("static/css/style.css"), STYLESHEET)?;

    // Create a sample post index
    let today = chrono::Local::now().format("%Y-%m-%d");
    let posts = format!(
        r#"- slug: hello-world
  title: Hello World
  date: {}
  summary: The first post on this site.
  tags: [general]
"#,
        today
    );
    fs::write(target_dir.join("content/posts.yml"), posts)?;

    tracing::debug!("Scaffolded site in {:?}", target_dir);
    Ok(())
}
