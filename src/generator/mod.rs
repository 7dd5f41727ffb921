//! Generator module - writes every page of the site as static HTML

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::{posts_tagged, tag_counts, tag_slug, AuthorProfile, PostSummary};
use crate::data::SiteData;
use crate::helpers::current_year;
use crate::i18n::I18n;
use crate::templates::{self, PageMeta, RenderContext};
use crate::Site;

/// Static site generator
pub struct Generator {
    site: Site,
    i18n: I18n,
    data: SiteData,
    year: i32,
}

impl Generator {
    /// Create a new generator, loading translations and site data
    pub fn new(site: &Site) -> Result<Self> {
        let mut i18n = I18n::new(&site.config.language);
        i18n.load_languages(&site.language_dir)?;
        let data = SiteData::load(&site.base_dir)?;

        Ok(Self {
            site: site.clone(),
            i18n,
            data,
            year: current_year(),
        })
    }

    /// Override the footer copyright year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Generate the entire site from recency-ordered posts
    pub fn generate(&self, posts: &[PostSummary], author: &AuthorProfile) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        self.copy_static_assets()?;

        let ctx = RenderContext::new(&self.site.config, &self.i18n, self.year);

        self.generate_home(&ctx, posts)?;
        self.generate_about(&ctx, author)?;
        self.generate_projects(&ctx)?;
        self.generate_blog(&ctx, posts)?;
        self.generate_tag_pages(&ctx, posts)?;
        self.generate_not_found(&ctx)?;

        Ok(())
    }

    fn generate_home(&self, ctx: &RenderContext, posts: &[PostSummary]) -> Result<()> {
        let config = ctx.config;
        let meta = PageMeta::new(&config.title, &config.description);
        self.write_page("index.html", ctx, &meta, &templates::home(ctx, posts))
    }

    fn generate_about(&self, ctx: &RenderContext, author: &AuthorProfile) -> Result<()> {
        let meta = PageMeta::new(
            format!("{} • {}", ctx.t("about.title"), author.name),
            format!("{} • {}", ctx.t("about.description"), author.name),
        );
        let body = templates::about(ctx, author, &self.data.skills, &self.data.jobs);
        self.write_page("about/index.html", ctx, &meta, &body)
    }

    fn generate_projects(&self, ctx: &RenderContext) -> Result<()> {
        let meta = PageMeta::new(
            format!("{} - {}", ctx.t("projects.heading"), ctx.config.author),
            &ctx.config.description,
        );
        let body = templates::projects(ctx, &self.data.projects);
        self.write_page("projects/index.html", ctx, &meta, &body)
    }

    fn generate_blog(&self, ctx: &RenderContext, posts: &[PostSummary]) -> Result<()> {
        let meta = PageMeta::new(
            format!("{} - {}", ctx.t("blog.heading"), ctx.config.title),
            &ctx.config.description,
        );
        self.write_page("blog/index.html", ctx, &meta, &templates::blog(ctx, posts))
    }

    /// Tag index plus one listing per tag slug
    fn generate_tag_pages(&self, ctx: &RenderContext, posts: &[PostSummary]) -> Result<()> {
        let meta = PageMeta::new(
            format!("{} - {}", ctx.t("tags.heading"), ctx.config.title),
            &ctx.config.description,
        );
        self.write_page("tags/index.html", ctx, &meta, &templates::tags_index(ctx, posts))?;

        let tags = tag_counts(posts);
        for (name, _) in &tags {
            let slug = tag_slug(name);
            let tagged: Vec<PostSummary> = posts_tagged(posts, &slug).into_iter().cloned().collect();
            let meta = PageMeta::new(
                format!("{} - {}", name, ctx.config.title),
                format!("{} {}", ctx.t("tags.tagged"), name),
            );
            let body = templates::tag_page(ctx, name, &tagged);
            self.write_page(&format!("tags/{}/index.html", slug), ctx, &meta, &body)?;
        }

        tracing::debug!("Generated {} tag pages", tags.len());
        Ok(())
    }

    fn generate_not_found(&self, ctx: &RenderContext) -> Result<()> {
        let meta = PageMeta::new(
            format!("404 - {}", ctx.config.title),
            ctx.t("not_found.message"),
        );
        self.write_page("404.html", ctx, &meta, &templates::not_found(ctx))
    }

    /// Wrap `body` in the layout and write it below the public directory
    fn write_page(
        &self,
        relative: &str,
        ctx: &RenderContext,
        meta: &PageMeta,
        body: &str,
    ) -> Result<()> {
        let html = templates::layout(ctx, meta, body);
        let output_path = self.site.public_dir.join(relative);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Copy the static directory to `<public>/static`
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        let target = self.site.public_dir.join("static");
        let mut copied = 0;

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || is_hidden(path) {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = target.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);
        Ok(())
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
