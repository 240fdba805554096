use anyhow::{Context, Result, anyhow};
use directories::UserDirs;
use log::{info, warn};
use serde::Deserialize;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::error::Error;
use crate::gestures::Gesture;
use crate::lessons::{Lesson, LessonSession};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

pub fn config_dir() -> Result<PathBuf> {
    let home = UserDirs::new()
        .ok_or_else(|| anyhow!("could not determine home directory"))?
        .home_dir()
        .to_path_buf();
    Ok(home.join(".config").join("signtutor"))
}

pub fn catalog_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("lessons.toml"))
}

fn default_catalog_text() -> &'static str {
    include_str!("../catalogs/default.toml")
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(default_catalog_text()).context("embedded default catalog")
    }

    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(txt)?;
        validate_catalog(&catalog)?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read {}: {e}", path.display()))?;
        let catalog = Self::from_toml_str(&txt)
            .map_err(|e| anyhow!("failed to parse {}: {e}", path.display()))?;
        info!(
            "loaded catalog '{}' ({} lessons) from {}",
            catalog.name(),
            catalog.lessons.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Loads the user catalog, writing the built-in one first if none exists.
    pub fn load_or_install_default() -> Result<Self> {
        let path = catalog_path()?;
        install_default(&path)?;
        Self::load(&path)
    }

    pub fn name(&self) -> &str {
        self.meta.name.as_deref().unwrap_or("unnamed")
    }

    pub fn into_session(self) -> crate::Result<LessonSession> {
        LessonSession::new(self.lessons)
    }
}

/// Writes the built-in catalog to `path` unless a file is already there.
pub fn install_default(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, default_catalog_text())?;
    info!("installed default catalog at {}", path.display());
    Ok(true)
}

fn validate_catalog(c: &Catalog) -> crate::Result<()> {
    if c.lessons.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let mut seen = HashSet::new();
    for lesson in &c.lessons {
        let id = lesson.id.trim();
        if id.is_empty() || !seen.insert(id) {
            return Err(Error::DuplicateLesson(lesson.id.clone()));
        }
        if Gesture::from_name(&lesson.gesture).is_none() {
            warn!(
                "lesson '{}' targets unknown gesture '{}'; it can never be passed",
                lesson.id, lesson.gesture
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_eleven_lessons_in_order() {
        let c = Catalog::builtin().unwrap();
        assert_eq!(c.name(), "default");
        let ids: Vec<&str> = c.lessons.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "thumbs-up",
                "thumbs-down",
                "peace-sign",
                "fist",
                "pointing",
                "open-hand",
                "pinky-promise",
                "ok-sign",
                "rock-on",
                "call-me",
                "i-love-you",
            ]
        );
        for (lesson, gesture) in c.lessons.iter().zip(Gesture::ALL) {
            assert_eq!(lesson.target(), Some(gesture));
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::from_toml_str("[meta]\nname = \"x\"\n").unwrap_err();
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::EmptyCatalog));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let txt = r#"
[[lessons]]
id = "fist"
gesture = "Fist"
meaning = "a"
hint = "b"

[[lessons]]
id = "fist"
gesture = "Open Hand"
meaning = "c"
hint = "d"
"#;
        let err = Catalog::from_toml_str(txt).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::DuplicateLesson("fist".into()))
        );
    }

    #[test]
    fn unknown_gesture_is_accepted() {
        let txt = r#"
[[lessons]]
id = "wave"
gesture = "Wave"
meaning = "Hello"
hint = "Wave your hand"
"#;
        let c = Catalog::from_toml_str(txt).unwrap();
        assert_eq!(c.name(), "unnamed");
        assert_eq!(c.lessons[0].target(), None);
    }

    #[test]
    fn missing_lesson_field_fails_to_parse() {
        let txt = "[[lessons]]\nid = \"fist\"\ngesture = \"Fist\"\n";
        assert!(Catalog::from_toml_str(txt).is_err());
    }

    #[test]
    fn install_then_load_round_trips() {
        let dir = std::env::temp_dir().join(format!("signtutor-cfg-{}", std::process::id()));
        let path = dir.join("lessons.toml");
        let _ = fs::remove_dir_all(&dir);

        assert!(install_default(&path).unwrap());
        assert!(!install_default(&path).unwrap());
        let c = Catalog::load(&path).unwrap();
        assert_eq!(c.lessons.len(), 11);

        let _ = fs::remove_dir_all(&dir);
    }
}
