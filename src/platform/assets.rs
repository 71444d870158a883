//! Startup asset loading
//!
//! Textures are required; the font is optional and only disables the score
//! text when missing.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const BIRD_IMAGE: &str = "bird.png";
pub const PIPE_UPPER_IMAGE: &str = "pipe1.png";
pub const PIPE_LOWER_IMAGE: &str = "pipe2.png";
pub const FONT_FILE: &str = "arial.ttf";

/// A required asset could not be used
#[derive(Debug)]
pub enum AssetError {
    /// File missing or unreadable
    Read { path: PathBuf, source: io::Error },
    /// File exists but holds no data
    Empty { path: PathBuf },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Read { path, source } => {
                write!(f, "failed to load {}: {}", path.display(), source)
            }
            AssetError::Empty { path } => write!(f, "asset {} is empty", path.display()),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Read { source, .. } => Some(source),
            AssetError::Empty { .. } => None,
        }
    }
}

/// Raw asset bytes handed to the renderer
#[derive(Debug, Clone)]
pub struct Assets {
    pub bird: Vec<u8>,
    /// Drawn mirrored vertically
    pub pipe_upper: Vec<u8>,
    pub pipe_lower: Vec<u8>,
    pub font: Option<Vec<u8>>,
}

impl Assets {
    /// Load everything from `dir`. Missing textures are fatal.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let assets = Self {
            bird: read_required(&dir.join(BIRD_IMAGE))?,
            pipe_upper: read_required(&dir.join(PIPE_UPPER_IMAGE))?,
            pipe_lower: read_required(&dir.join(PIPE_LOWER_IMAGE))?,
            font: read_optional(&dir.join(FONT_FILE)),
        };
        log::info!(
            "Assets loaded from {} (font: {})",
            dir.display(),
            if assets.font.is_some() { "yes" } else { "no" }
        );
        Ok(assets)
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }
}

fn read_required(path: &Path) -> Result<Vec<u8>, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(AssetError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(bytes)
}

fn read_optional(path: &Path) -> Option<Vec<u8>> {
    match read_required(path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            log::warn!("{}; score text disabled", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_textures(dir: &Path) {
        for name in [BIRD_IMAGE, PIPE_UPPER_IMAGE, PIPE_LOWER_IMAGE] {
            fs::write(dir.join(name), b"\x89PNG").unwrap();
        }
    }

    #[test]
    fn test_load_all() {
        let dir = tempfile::tempdir().unwrap();
        write_textures(dir.path());
        fs::write(dir.path().join(FONT_FILE), b"font").unwrap();

        let assets = Assets::load(dir.path()).unwrap();
        assert_eq!(assets.bird, b"\x89PNG");
        assert!(assets.has_font());
    }

    #[test]
    fn test_missing_font_degrades() {
        let dir = tempfile::tempdir().unwrap();
        write_textures(dir.path());

        let assets = Assets::load(dir.path()).unwrap();
        assert!(!assets.has_font());
    }

    #[test]
    fn test_missing_texture_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_textures(dir.path());
        fs::remove_file(dir.path().join(PIPE_LOWER_IMAGE)).unwrap();

        let err = Assets::load(dir.path()).unwrap_err();
        assert!(matches!(err, AssetError::Read { ref path, .. } if path.ends_with(PIPE_LOWER_IMAGE)));
    }

    #[test]
    fn test_empty_texture_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_textures(dir.path());
        fs::write(dir.path().join(BIRD_IMAGE), b"").unwrap();

        let err = Assets::load(dir.path()).unwrap_err();
        assert!(matches!(err, AssetError::Empty { .. }));
        assert!(err.to_string().contains(BIRD_IMAGE));
    }
}
