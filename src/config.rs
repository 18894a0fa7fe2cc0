/// External configuration loader.
///
/// Reads `maze.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.
/// The knobs here mirror what the device menu exposes: maze dimensions
/// (held to the menu's 4..=99 range) and the display mounting rotation.
/// The pipeline itself only requires dimensions ≥ 1; the clamp lives here.

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::coords::Rotation;

const MIN_DIMENSION: i32 = 4;
const MAX_DIMENSION: i32 = 99;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
    pub rotation: Rotation,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    maze: TomlMaze,
    #[serde(default)]
    display: TomlDisplay,
}

#[derive(Deserialize, Debug)]
struct TomlMaze {
    #[serde(default = "default_width")]
    width: i32,
    #[serde(default = "default_height")]
    height: i32,
}

#[derive(Deserialize, Debug)]
struct TomlDisplay {
    #[serde(default = "default_rotation")]
    rotation: i32,
}

// ── Defaults ──

fn default_width() -> i32 { 4 }
fn default_height() -> i32 { 4 }
fn default_rotation() -> i32 { 0 }

impl Default for TomlMaze {
    fn default() -> Self {
        TomlMaze { width: default_width(), height: default_height() }
    }
}

impl Default for TomlDisplay {
    fn default() -> Self {
        TomlDisplay { rotation: default_rotation() }
    }
}

// ── Loading ──

impl MazeConfig {
    /// Load config from `maze.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        Self::from_toml(load_toml(&candidate_dirs()))
    }

    fn from_toml(cfg: TomlConfig) -> Self {
        MazeConfig {
            width: cfg.maze.width.clamp(MIN_DIMENSION, MAX_DIMENSION),
            height: cfg.maze.height.clamp(MIN_DIMENSION, MAX_DIMENSION),
            rotation: Rotation::from_degrees(cfg.display.rotation),
        }
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig::from_toml(TomlConfig::default())
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for maze.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("maze.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: maze.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> MazeConfig {
        MazeConfig::from_toml(toml::from_str(text).unwrap())
    }

    #[test]
    fn defaults_match_the_menu_defaults() {
        let cfg = MazeConfig::default();
        assert_eq!(cfg.width, 4);
        assert_eq!(cfg.height, 4);
        assert_eq!(cfg.rotation, Rotation::R0);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let cfg = parse("[maze]\nwidth = 12\n");
        assert_eq!(cfg.width, 12);
        assert_eq!(cfg.height, 4);
        assert_eq!(cfg.rotation, Rotation::R0);
    }

    #[test]
    fn dimensions_are_held_to_the_menu_range() {
        let cfg = parse("[maze]\nwidth = 1\nheight = 500\n");
        assert_eq!(cfg.width, 4);
        assert_eq!(cfg.height, 99);
    }

    #[test]
    fn rotation_is_read_in_degrees() {
        let cfg = parse("[display]\nrotation = 180\n");
        assert_eq!(cfg.rotation, Rotation::R180);
    }
}
