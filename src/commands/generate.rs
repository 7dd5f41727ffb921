//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Generate the static site
pub fn run(site: &Site) -> Result<()> {
    let start = Instant::now();

    // Load content
    let loader = ContentLoader::new(site);
    let posts = loader.load_posts()?;
    let author = loader.load_author()?;

    tracing::info!("Loaded {} posts", posts.len());

    let generator = Generator::new(site)?;
    generator.generate(&posts, &author)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch for file changes and regenerate
///
/// Blocks until the watcher shuts down. Changes are batched by a 500ms
/// debouncer and every batch with a relevant path triggers one rebuild, so
/// the last edit of a burst always lands. The configuration is re-read on
/// every rebuild so edits to `_config.yml` take effect.
pub fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();

    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&site.content_dir, &site.static_dir, &site.language_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    for file in ["_config.yml", "_data.yml"] {
        let path = site.base_dir.join(file);
        if path.exists() {
            debouncer
                .watcher()
                .watch(&path, RecursiveMode::NonRecursive)?;
            tracing::debug!("Watching: {:?}", path);
        }
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed: Vec<_> = events
                    .iter()
                    .map(|e| e.path.as_path())
                    .filter(|p| !is_ignored(p))
                    .collect();
                if changed.is_empty() {
                    continue;
                }

                tracing::info!("File changed, regenerating...");
                tracing::debug!("Changed: {:?}", changed);
                if let Err(e) = Site::new(&site.base_dir).and_then(|fresh| run(&fresh)) {
                    tracing::error!("Generation failed: {:#}", e);
                }
            }
            Ok(Err(e)) => tracing::warn!("Watch error: {:?}", e),
            Err(_) => break,
        }
    }

    Ok(())
}

/// Editor swap files and similar noise
fn is_ignored(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    name.starts_with('.') || name.ends_with('~') || name.ends_with(".swp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use tempfile::TempDir;

    fn home_page(site: &Site) -> String {
        fs::read_to_string(site.public_dir.join("index.html")).unwrap_or_default()
    }

    fn write_post(site: &Site, title: &str) {
        fs::write(
            site.content_dir.join("posts.yml"),
            format!("- {{slug: p, title: {}, date: 2024-01-01}}\n", title),
        )
        .unwrap();
    }

    #[test]
    fn test_watch_rebuilds_after_last_edit_of_burst() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        let site = Site::new(dir.path()).unwrap();
        write_post(&site, "First");
        run(&site).unwrap();

        let watched = site.clone();
        let _watcher = thread::spawn(move || watch(&watched));
        thread::sleep(Duration::from_millis(1200));

        write_post(&site, "Second");
        thread::sleep(Duration::from_millis(150));
        write_post(&site, "Third");

        let deadline = Instant::now() + Duration::from_secs(10);
        while !home_page(&site).contains("Third") && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(100));
        }
        assert!(home_page(&site).contains("Third"));
    }

    #[test]
    fn test_is_ignored() {
        assert!(is_ignored(Path::new("content/.posts.yml.swp")));
        assert!(is_ignored(Path::new("content/posts.yml~")));
        assert!(!is_ignored(Path::new("content/posts.yml")));
    }
}
