// Persisted worksheet settings.
//
// One JSON snapshot holds everything needed to regenerate a worksheet: the
// title, the word list, which activity to print, the seed and the grid size.
// Unknown or missing fields fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wordgrid_core::word::WordPair;
use wordgrid_layout::activity::{ActivityKind, GeneratorOptions};
use wordgrid_layout::word_search::clamp_grid_size;

use crate::{CliError, Result};

/// Environment variable naming a settings file.
pub const SETTINGS_ENV: &str = "WORDGRID_SETTINGS";

/// Settings file name inside `~/.wordgrid`.
const HOME_SETTINGS: &str = "settings.json";

/// Settings file name in the current directory.
const LOCAL_SETTINGS: &str = "wordgrid.json";

/// The saved worksheet state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    pub words: Vec<WordPair>,
    /// Activity to print; `None` prints all six.
    pub activity: Option<ActivityKind>,
    pub seed: u32,
    pub grid_size: usize,
    pub show_answers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let options = GeneratorOptions::default();
        Self {
            title: "Vocabulary Worksheet".to_string(),
            words: Vec::new(),
            activity: None,
            seed: options.seed,
            grid_size: options.grid_size,
            show_answers: false,
        }
    }
}

impl Settings {
    /// Generator options with the grid size clamped.
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            seed: self.seed,
            grid_size: clamp_grid_size(self.grid_size),
        }
    }
}

/// Candidate settings files, in search order:
///
/// 1. `explicit` (the `--settings` argument)
/// 2. `WORDGRID_SETTINGS` environment variable
/// 3. `~/.wordgrid/settings.json`
/// 4. `./wordgrid.json`
pub fn search_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    build_search_paths(
        explicit,
        std::env::var_os(SETTINGS_ENV).map(PathBuf::from),
        home_dir(),
    )
}

fn build_search_paths(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = explicit {
        paths.push(p.to_path_buf());
    }
    if let Some(p) = env_path {
        paths.push(p);
    }
    if let Some(home) = home {
        paths.push(home.join(".wordgrid").join(HOME_SETTINGS));
    }
    paths.push(PathBuf::from(LOCAL_SETTINGS));
    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Load settings from the first existing candidate.
///
/// Returns the settings together with the path they should be saved to: the
/// file they came from, else the explicit path, else the first candidate.
/// No file at all means defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<(Settings, PathBuf)> {
    let paths = search_paths(explicit);
    if let Some(found) = paths.iter().find(|p| p.is_file()) {
        let settings = read_settings(found)?;
        tracing::debug!(path = %found.display(), "loaded settings");
        return Ok((settings, found.clone()));
    }
    let target = paths
        .into_iter()
        .next()
        .unwrap_or_else(|| PathBuf::from(LOCAL_SETTINGS));
    tracing::debug!(path = %target.display(), "no settings file, using defaults");
    Ok((Settings::default(), target))
}

/// Read one settings file.
pub fn read_settings(path: &Path) -> Result<Settings> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Settings {
        path: path.to_path_buf(),
        source,
    })
}

/// Write settings as pretty JSON, creating parent directories.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(settings)?;
    json.push('\n');
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("wordgrid-settings-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn search_order() {
        let paths = build_search_paths(
            Some(Path::new("/tmp/explicit.json")),
            Some(PathBuf::from("/tmp/env.json")),
            Some(PathBuf::from("/home/user")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/tmp/explicit.json"),
                PathBuf::from("/tmp/env.json"),
                PathBuf::from("/home/user/.wordgrid/settings.json"),
                PathBuf::from("wordgrid.json"),
            ]
        );
    }

    #[test]
    fn search_order_without_env_or_home() {
        let paths = build_search_paths(None, None, None);
        assert_eq!(paths, vec![PathBuf::from("wordgrid.json")]);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.grid_size, 15);
        assert_eq!(settings.title, "Vocabulary Worksheet");
        assert_eq!(settings.activity, None);
        assert!(!settings.show_answers);
    }

    #[test]
    fn activity_uses_kebab_case() {
        let settings: Settings =
            serde_json::from_str(r#"{"activity": "fill-in", "words": [{"id": 1, "word": "gato"}]}"#)
                .unwrap();
        assert_eq!(settings.activity, Some(ActivityKind::FillIn));
        assert_eq!(settings.words[0].definition, "");
    }

    #[test]
    fn options_clamp_grid_size() {
        let settings = Settings {
            seed: 4,
            grid_size: 100,
            ..Settings::default()
        };
        assert_eq!(
            settings.options(),
            GeneratorOptions {
                seed: 4,
                grid_size: 25
            }
        );
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("nested/settings.json");
        let settings = Settings {
            title: "Animals".to_string(),
            words: vec![WordPair::new(1, "gato", "cat")],
            activity: Some(ActivityKind::Crossword),
            seed: 77,
            grid_size: 12,
            show_answers: true,
        };
        save_settings(&settings, &path).unwrap();
        let (loaded, from) = load_settings(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(from, path);
    }

    #[test]
    fn reading_missing_file_is_an_error() {
        let path = temp_path("does-not-exist.json");
        let settings = read_settings(&path);
        assert!(matches!(settings, Err(CliError::Read { .. })));
    }

    #[test]
    fn malformed_file_is_reported() {
        let path = temp_path("malformed.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_settings(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, CliError::Settings { .. }));
        assert!(err.to_string().contains("malformed.json"));
    }
}
