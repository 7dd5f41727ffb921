//! Internationalization (i18n) support
//!
//! English and Polish UI strings are built in. YAML files in the site's
//! language directory (`languages/<lang>.yml`) are merged over them key by
//! key.

use anyhow::Result;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_EN: &str = r#"
nav:
  blog: Blog
  projects: Projects
  about: About
home:
  intro: >-
    Welcome to my site, the place where I consolidate my knowledge of
    <b>web development</b> and share it with others. Here you will find my
    thoughts on programming, personal growth and work automation. The
    <b>projects</b> tab lists what I have worked on or am working on now.
    Enjoy reading!
  more_about_me: More about me
  recent_posts: Recent posts
  view_all: All posts
  no_posts: No posts found.
  published: Published on
  read_more: Read more
about:
  title: About
  heading: About me
  description: About me
  skills: My main skills
  experience: Experience
projects:
  heading: Projects
blog:
  heading: All posts
tags:
  heading: Tags
  tagged: Tagged
  count:
    zero: no posts
    one: 1 post
    other: "%d posts"
not_found:
  heading: "404"
  message: Sorry, we couldn't find this page.
  back_home: Back to homepage
"#;

const BUILTIN_PL: &str = r#"
nav:
  blog: Blog
  projects: Projekty
  about: O mnie
home:
  intro: >-
    Witaj na mojej stronie - miejscu w którym utrwalam swoją wiedzę o
    <b>programowaniu stron internetowych</b> i dzielę się nią z innymi. Możesz
    tu znaleźć moje przemyślenia na temat programowania, rozwoju osobistego i
    automatyzacji pracy. W zakładce <b>projekty</b> znajdziesz projekty nad
    którymi pracowałem lub aktualnie pracuję. Miłego czytania!
  more_about_me: Więcej o mnie
  recent_posts: Ostatnie artykuły
  view_all: Wszystkie artykuły
  published: Opublikowane
  read_more: Czytaj więcej
about:
  title: O mnie
  heading: O mnie
  description: O mnie
  skills: Moje główne umiejętności
  experience: Doświadczenie
projects:
  heading: Projekty
blog:
  heading: Wszystkie artykuły
tags:
  heading: Tagi
  tagged: Tag
  count:
    zero: brak artykułów
    one: 1 artykuł
    other: "artykuły: %d"
not_found:
  message: Niestety, nie znaleźliśmy tej strony.
  back_home: Wróć na stronę główną
"#;

/// Internationalization handler
pub struct I18n {
    /// Current language
    language: String,
    /// Language data: lang -> key -> translation
    translations: HashMap<String, Mapping>,
}

impl I18n {
    /// Create a handler with the built-in translations
    pub fn new(language: &str) -> Self {
        let mut translations = HashMap::new();
        for (lang, source) in [("en", BUILTIN_EN), ("pl", BUILTIN_PL)] {
            match serde_yaml::from_str::<Mapping>(source) {
                Ok(data) => {
                    translations.insert(lang.to_string(), data);
                }
                Err(e) => tracing::error!("Built-in '{}' translations are invalid: {}", lang, e),
            }
        }

        Self {
            language: language.to_string(),
            translations,
        }
    }

    /// Load language files from a directory, merging over what is loaded
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let ext = path.extension().and_then(|e| e.to_str());
            if !path.is_file() || !matches!(ext, Some("yml") | Some("yaml")) {
                continue;
            }

            let Some(lang) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Mapping>(&content) {
                Ok(data) => {
                    let existing = self.translations.entry(lang.to_string()).or_default();
                    merge_mapping(existing, data);
                    tracing::debug!("Loaded language file: {:?}", path);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                }
            }
        }

        Ok(())
    }

    /// Get a translation by key
    /// Key can be nested like "nav.about"
    pub fn get(&self, key: &str) -> String {
        self.get_for_lang(&self.language, key)
    }

    /// Get a translation for a specific language
    pub fn get_for_lang(&self, lang: &str, key: &str) -> String {
        if let Some(value) = self.lookup(lang, key) {
            return yaml_value_to_string(value);
        }

        // Fallback to English
        if lang != "en" {
            if let Some(value) = self.lookup("en", key) {
                return yaml_value_to_string(value);
            }
        }

        // Return key as fallback
        key.to_string()
    }

    /// Get a pluralized translation (`key.zero`, `key.one`, `key.other`)
    pub fn get_plural(&self, key: &str, count: usize) -> String {
        let plural_key = if count == 0 {
            format!("{}.zero", key)
        } else if count == 1 {
            format!("{}.one", key)
        } else {
            format!("{}.other", key)
        };

        self.get(&plural_key).replace("%d", &count.to_string())
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let first = parts.next()?;
        let mut current = self.translations.get(lang)?.get(first)?;

        for part in parts {
            match current {
                Value::Mapping(map) => current = map.get(part)?,
                _ => return None,
            }
        }

        Some(current)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("en")
    }
}

/// Recursively merge `overlay` into `base`; overlay values win
fn merge_mapping(base: &mut Mapping, overlay: Mapping) {
    for (key, value) in overlay {
        let Value::Mapping(nested) = value else {
            base.insert(key, value);
            continue;
        };

        if let Some(Value::Mapping(existing)) = base.get_mut(&key) {
            merge_mapping(existing, nested);
        } else {
            base.insert(key, Value::Mapping(nested));
        }
    }
}

/// Convert a YAML value to a string
fn yaml_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => format!("{:?}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_translations() {
        let en = I18n::new("en");
        assert_eq!(en.get("home.no_posts"), "No posts found.");
        assert_eq!(en.get("nav.about"), "About");

        let pl = I18n::new("pl");
        assert_eq!(pl.get("home.recent_posts"), "Ostatnie artykuły");
        assert_eq!(pl.get("home.view_all"), "Wszystkie artykuły");
        assert_eq!(pl.get_plural("tags.count", 1), "1 artykuł");
        assert_eq!(pl.get_plural("tags.count", 7), "artykuły: 7");
    }

    #[test]
    fn test_fallbacks() {
        let pl = I18n::new("pl");
        // Missing in Polish, present in English
        assert_eq!(pl.get("home.no_posts"), "No posts found.");
        assert_eq!(pl.get("not_found.heading"), "404");
        assert_eq!(pl.get("missing.key"), "missing.key");

        let de = I18n::new("de");
        assert_eq!(de.get("nav.blog"), "Blog");
        assert_eq!(de.get_plural("tags.count", 2), "2 posts");
    }

    #[test]
    fn test_language_file_merges() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("en.yml"),
            "home:\n  view_all: Every post\nposts:\n  zero: No posts\n  one: 1 post\n  other: '%d posts'\n",
        )
        .unwrap();

        let mut i18n = I18n::new("en");
        i18n.load_languages(dir.path()).unwrap();

        assert_eq!(i18n.get("home.view_all"), "Every post");
        assert_eq!(i18n.get("home.read_more"), "Read more");
        assert_eq!(i18n.get_plural("posts", 0), "No posts");
        assert_eq!(i18n.get_plural("posts", 1), "1 post");
        assert_eq!(i18n.get_plural("posts", 4), "4 posts");
    }
}
