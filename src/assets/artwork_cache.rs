//! Piece artwork bookkeeping.
//!
//! Artwork is fetched once per tile size and kept in a local directory next
//! to a one-line stamp file holding the side length it was fetched for. When
//! the configured side differs from the stamp, the artwork is stale and every
//! entry of the manifest needs refreshing.
//!
//! Fetching itself is left to the front-end; this module only decides what
//! is stale and where each image lives.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::board::board_types::{Color, Piece, PieceKind};
use crate::errors::{BoardError, BoardResult};

pub const STAMP_FILE_NAME: &str = "SavedInfo";

/// Artwork codes in fetch order: colour letter then piece letter.
pub const ARTWORK_CODES: [&str; 12] = [
    "wp", "wr", "wn", "wb", "wq", "wk", "bp", "br", "bn", "bb", "bq", "bk",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkEntry {
    pub code: &'static str,
    pub piece: Piece,
    pub path: PathBuf,
    pub url: String,
}

impl ArtworkEntry {
    /// FEN letter the image is drawn for.
    pub fn key(&self) -> char {
        self.piece.fen_char()
    }
}

#[derive(Debug, Clone)]
pub struct ArtworkCache {
    dir: PathBuf,
    base_url: String,
    theme: String,
}

impl ArtworkCache {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
            theme: theme.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn stamp_path(&self) -> PathBuf {
        self.dir.join(STAMP_FILE_NAME)
    }

    /// Side length recorded by the last fetch.
    ///
    /// A missing stamp means nothing was fetched yet. A stamp that does not
    /// hold a number is treated the same way.
    pub fn saved_side(&self) -> BoardResult<Option<u32>> {
        let path = self.stamp_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no artwork stamp at {}", path.display());
                return Ok(None);
            }
            Err(source) => return Err(BoardError::Stamp { path, source }),
        };

        match contents.trim().parse::<u32>() {
            Ok(side) => Ok(Some(side)),
            Err(_) => {
                warn!("ignoring unreadable artwork stamp {}: {:?}", path.display(), contents.trim());
                Ok(None)
            }
        }
    }

    pub fn needs_refresh(&self, side: u32) -> BoardResult<bool> {
        Ok(self.saved_side()? != Some(side))
    }

    /// Record that artwork for `side` is now on disk.
    pub fn record_side(&self, side: u32) -> BoardResult<()> {
        let path = self.stamp_path();
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(&path, side.to_string()))
            .map_err(|source| BoardError::Stamp { path, source })
    }

    /// Every image the board needs at `side`, in `ARTWORK_CODES` order.
    pub fn manifest(&self, side: u32) -> Vec<ArtworkEntry> {
        ARTWORK_CODES
            .iter()
            .filter_map(|&code| {
                let piece = piece_for_code(code)?;
                Some(ArtworkEntry {
                    code,
                    piece,
                    path: self.dir.join(format!("{code}.png")),
                    url: format!("{}/{}/{side}/{code}.png", self.base_url, self.theme),
                })
            })
            .collect()
    }

    /// Manifest entries whose image file is not on disk.
    pub fn missing(&self, side: u32) -> Vec<ArtworkEntry> {
        self.manifest(side)
            .into_iter()
            .filter(|entry| !entry.path.is_file())
            .collect()
    }

    /// Entries to fetch before drawing at `side`: everything when the stamp
    /// is stale, otherwise only files that went missing.
    pub fn refresh_plan(&self, side: u32) -> BoardResult<Vec<ArtworkEntry>> {
        if self.needs_refresh(side)? {
            Ok(self.manifest(side))
        } else {
            Ok(self.missing(side))
        }
    }
}

/// `"bq"` -> Dark queen. `None` for anything that is not a two-letter code.
pub fn piece_for_code(code: &str) -> Option<Piece> {
    let mut chars = code.chars();
    let color = match chars.next()? {
        'w' => Color::Light,
        'b' => Color::Dark,
        _ => return None,
    };
    let kind = match chars.next()? {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("plum_board_{}_{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn cache_in(dir: &Path) -> ArtworkCache {
        ArtworkCache::new(dir, "https://example.test/pieces", "glass")
    }

    #[test]
    fn missing_stamp_needs_refresh() {
        let dir = scratch_dir("missing_stamp");
        let cache = cache_in(&dir);
        assert_eq!(cache.saved_side().unwrap(), None);
        assert!(cache.needs_refresh(100).unwrap());
    }

    #[test]
    fn recorded_side_is_read_back() {
        let dir = scratch_dir("recorded");
        let cache = cache_in(&dir);
        cache.record_side(80).unwrap();
        assert_eq!(fs::read_to_string(cache.stamp_path()).unwrap(), "80");
        assert_eq!(cache.saved_side().unwrap(), Some(80));
        assert!(!cache.needs_refresh(80).unwrap());
        assert!(cache.needs_refresh(100).unwrap());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn garbage_stamp_counts_as_absent() {
        let dir = scratch_dir("garbage");
        fs::create_dir_all(&dir).unwrap();
        let cache = cache_in(&dir);
        fs::write(cache.stamp_path(), "not a number").unwrap();
        assert_eq!(cache.saved_side().unwrap(), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn manifest_lists_twelve_images_with_keys() {
        let cache = cache_in(Path::new("Pieces"));
        let manifest = cache.manifest(100);
        assert_eq!(manifest.len(), 12);
        assert_eq!(manifest[0].code, "wp");
        assert_eq!(manifest[0].key(), 'P');
        assert_eq!(manifest[0].url, "https://example.test/pieces/glass/100/wp.png");
        assert_eq!(manifest[0].path, Path::new("Pieces").join("wp.png"));
        assert_eq!(manifest[11].key(), 'k');
    }

    #[test]
    fn fresh_stamp_only_plans_missing_files() {
        let dir = scratch_dir("plan");
        let cache = cache_in(&dir);
        assert_eq!(cache.refresh_plan(100).unwrap().len(), 12);

        cache.record_side(100).unwrap();
        for entry in cache.manifest(100).iter().skip(2) {
            fs::write(&entry.path, b"png").unwrap();
        }
        let plan = cache.refresh_plan(100).unwrap();
        let codes: Vec<&str> = plan.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec!["wp", "wr"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn codes_map_to_pieces() {
        assert_eq!(piece_for_code("bq"), Some(Piece::new(Color::Dark, PieceKind::Queen)));
        assert_eq!(piece_for_code("wn"), Some(Piece::new(Color::Light, PieceKind::Knight)));
        assert_eq!(piece_for_code("xq"), None);
        assert_eq!(piece_for_code("wqq"), None);
    }
}
