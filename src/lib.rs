//! Moviename - movie title extraction from media file names
//!
//! Turns noisy download names such as
//! `The.Movie.Name.2012.BluRay.720p.x264-GROUP.mkv` into a clean title,
//! `The Movie Name (2012)`, by running a fixed, rule-driven pipeline.
//!
//! # Architecture
//!
//! The normalizer is a pipeline of stages:
//! 1. Pre-cleaning (separators, accents) and bracket removal
//! 2. Category-scoped blacklist filtering
//! 3. Repair passes (whitespace, release group, disc marker, stray dashes)
//! 4. Year re-insertion, extension and title case
//!
//! Catalog lookups are delegated to caller-provided collaborators, see [`lookup`].
//!
//! # Example
//!
//! ```
//! use moviename::{fileslug, movie_name_from_file};
//!
//! assert_eq!(movie_name_from_file("Movie (2010) [XViD].avi"), "Movie (2010)");
//! assert_eq!(fileslug("/films/My Movie (2010).AVI"), "my_movie__2010_.avi");
//! ```

use lava_torrent::torrent::v1::Torrent;
use std::fs;
use std::path::Path;

pub use error::Error;

// Normalization pipeline
pub mod normalize;

// Catalog lookup collaborators
pub mod lookup;

pub mod config;
pub mod logging;
pub mod slug;

pub use normalize::{movie_name_from_file, normalize, Category, CategorySet, NormalizeOptions};
pub use slug::fileslug;

mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum Error {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
        #[error("Torrent error: {0}")]
        Torrent(String),
        #[error("Config error: {0}")]
        Config(String),
        #[error("Invalid config file: {0}")]
        Toml(#[from] toml::de::Error),
        #[error("Lookup error: {0}")]
        Lookup(String),
        #[error("No confident match for {cleaned:?} (originally {original:?})")]
        NoConfidentMatch { cleaned: String, original: String },
    }

    impl Error {
        /// Whether this is the recoverable "no confident match" outcome.
        pub fn is_no_match(&self) -> bool {
            matches!(self, Error::NoConfidentMatch { .. })
        }
    }

    impl From<lava_torrent::LavaTorrentError> for Error {
        fn from(e: lava_torrent::LavaTorrentError) -> Self {
            Error::Torrent(e.to_string())
        }
    }
}

/// Information about a single file within the content
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Full path within the torrent/directory
    pub path: String,
    /// Just the filename
    pub filename: String,
    /// File size in bytes
    pub size: u64,
}

/// A named bundle of files whose names are to be cleaned
#[derive(Debug)]
pub struct ContentInfo {
    /// Name of the content (torrent name, directory name, etc.)
    pub name: String,
    /// List of files within the content
    pub files: Vec<FileInfo>,
}

impl ContentInfo {
    /// Video files, largest first.
    pub fn video_files(&self) -> Vec<&FileInfo> {
        let mut videos: Vec<&FileInfo> = self
            .files
            .iter()
            .filter(|f| is_video_file(&f.filename))
            .collect();
        videos.sort_by(|a, b| b.size.cmp(&a.size));
        videos
    }
}

// =============================================================================
// CONTENT LOADERS
// =============================================================================

/// Load the file list of a `.torrent` metainfo file.
///
/// Multi-file torrents list every entry relative to the torrent root, in
/// path order. A single-file torrent yields one entry named after the torrent.
pub fn from_torrent<P: AsRef<Path>>(path: P) -> Result<ContentInfo, Error> {
    let torrent = Torrent::read_from_file(path.as_ref())?;
    Ok(torrent_content(torrent))
}

/// Same as [`from_torrent`], for metainfo already in memory.
pub fn from_torrent_bytes(bytes: &[u8]) -> Result<ContentInfo, Error> {
    let torrent = Torrent::read_from_bytes(bytes)?;
    Ok(torrent_content(torrent))
}

fn torrent_content(torrent: Torrent) -> ContentInfo {
    let files = match torrent.files {
        Some(entries) => {
            let mut files: Vec<FileInfo> = entries
                .into_iter()
                .map(|entry| FileInfo {
                    filename: normalize::basename(&entry.path.to_string_lossy()).to_string(),
                    path: entry.path.to_string_lossy().into_owned(),
                    size: u64::try_from(entry.length).unwrap_or(0),
                })
                .collect();
            files.sort_by(|a, b| a.path.cmp(&b.path));
            files
        }
        None => vec![FileInfo {
            path: torrent.name.clone(),
            filename: normalize::basename(&torrent.name).to_string(),
            size: u64::try_from(torrent.length).unwrap_or(0),
        }],
    };

    ContentInfo {
        name: torrent.name,
        files,
    }
}

/// Load content info from a directory
pub fn from_directory<P: AsRef<Path>>(path: P) -> Result<ContentInfo, Error> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let mut files = Vec::new();
    collect_files_recursive(path, path, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(ContentInfo { name, files })
}

/// Create content info from a raw file name (no file structure)
pub fn from_text(text: &str) -> ContentInfo {
    ContentInfo {
        name: text.to_string(),
        files: vec![FileInfo {
            path: text.to_string(),
            filename: normalize::basename(text).to_string(),
            size: 0,
        }],
    }
}

/// Check if path is a torrent file
pub fn is_torrent_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("torrent"))
}

/// Auto-detect input type and load content info
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ContentInfo, Error> {
    let path = path.as_ref();

    if path.is_dir() {
        from_directory(path)
    } else if path.is_file() && is_torrent_file(path) {
        from_torrent(path)
    } else {
        // Treat as a bare file name
        Ok(from_text(&path.to_string_lossy()))
    }
}

/// Whether a file name carries a video container extension.
pub fn is_video_file(filename: &str) -> bool {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    matches!(
        ext.as_str(),
        "mkv" | "mp4" | "avi" | "wmv" | "mov" | "m4v" | "ts" | "m2ts" | "mpg" | "mpeg" | "divx"
            | "ogm" | "webm" | "vob"
    )
}

fn collect_files_recursive(
    base: &Path,
    current: &Path,
    files: &mut Vec<FileInfo>,
) -> Result<(), Error> {
    for entry in fs::read_dir(current)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let entry_path = entry.path();

        let rel_path = entry_path
            .strip_prefix(base)
            .unwrap_or(&entry_path)
            .to_string_lossy()
            .to_string();

        if file_type.is_file() {
            let size = entry.metadata()?.len();
            let filename = entry.file_name().to_string_lossy().to_string();
            files.push(FileInfo {
                path: rel_path,
                filename,
                size,
            });
        } else if file_type.is_dir() {
            collect_files_recursive(base, &entry_path, files)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_is_video_file() {
        assert!(is_video_file("Movie.2012.MKV"));
        assert!(is_video_file("dir/movie.avi"));
        assert!(!is_video_file("movie.srt"));
        assert!(!is_video_file("movie"));
    }

    #[test]
    fn test_from_text() {
        let info = from_text("/downloads/Up.2009.720p.mkv");
        assert_eq!(info.files.len(), 1);
        assert_eq!(info.files[0].filename, "Up.2009.720p.mkv");
        assert_eq!(info.video_files().len(), 1);
    }

    #[test]
    fn test_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("Extras");
        fs::create_dir(&sub).unwrap();

        let mut big = File::create(dir.path().join("Up.2009.720p.BluRay.x264-CtrlHD.mkv")).unwrap();
        big.write_all(&[0u8; 64]).unwrap();
        File::create(dir.path().join("Up.2009.720p.BluRay.x264-CtrlHD.srt")).unwrap();
        File::create(sub.join("Up.Sample.mkv")).unwrap();

        let info = from_directory(dir.path()).unwrap();
        assert_eq!(info.files.len(), 3);

        let videos = info.video_files();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].filename, "Up.2009.720p.BluRay.x264-CtrlHD.mkv");
        assert_eq!(movie_name_from_file(&videos[0].filename), "Up (2009)");
    }

    #[test]
    fn test_from_torrent() {
        use lava_torrent::torrent::v1::TorrentBuilder;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Kill.Bill.Collection");
        fs::create_dir_all(root.join("Vol.2")).unwrap();
        fs::write(
            root.join("Kill.Bill.Vol.1.2003.DVDRip.XviD.AC3-DiSSOLVE.avi"),
            [1u8; 96],
        )
        .unwrap();
        fs::write(root.join("Vol.2/Kill.Bill.Vol.2.2004.720p.BluRay.x264-GROUP.mkv"), [2u8; 64])
            .unwrap();
        fs::write(root.join("Vol.2/Kill.Bill.Vol.2.nfo"), [3u8; 8]).unwrap();

        let torrent_path = dir.path().join("collection.torrent");
        TorrentBuilder::new(&root, 16 * 1024)
            .build()
            .unwrap()
            .write_into_file(&torrent_path)
            .unwrap();
        assert!(is_torrent_file(&torrent_path));

        let info = from_path(&torrent_path).unwrap();
        assert_eq!(info.name, "Kill.Bill.Collection");
        assert_eq!(info.files.len(), 3);

        let titles: Vec<String> = info
            .video_files()
            .iter()
            .map(|f| movie_name_from_file(&f.filename))
            .collect();
        assert_eq!(titles, ["Kill Bill Vol 1 (2003)", "Kill Bill Vol 2 (2004)"]);

        let bytes = fs::read(&torrent_path).unwrap();
        let again = from_torrent_bytes(&bytes).unwrap();
        assert_eq!(again.files.len(), info.files.len());
    }

    #[test]
    fn test_from_torrent_single_file() {
        use lava_torrent::torrent::v1::TorrentBuilder;

        let dir = tempfile::tempdir().unwrap();
        let movie = dir.path().join("Up.2009.720p.BluRay.DTS.x264-CtrlHD.mkv");
        fs::write(&movie, [0u8; 32]).unwrap();

        let bytes = TorrentBuilder::new(&movie, 16 * 1024)
            .build()
            .unwrap()
            .encode()
            .unwrap();
        let info = from_torrent_bytes(&bytes).unwrap();

        assert_eq!(info.files.len(), 1);
        assert_eq!(info.files[0].size, 32);
        assert_eq!(movie_name_from_file(&info.files[0].filename), "Up (2009)");
    }

    #[test]
    fn test_from_torrent_rejects_garbage() {
        let err = from_torrent_bytes(b"not a torrent").unwrap_err();
        assert!(matches!(err, Error::Torrent(_)));
    }

    #[test]
    fn test_from_path_falls_back_to_text() {
        let info = from_path("Not.A.Real.Path.2001.avi").unwrap();
        assert_eq!(info.name, "Not.A.Real.Path.2001.avi");
        assert_eq!(info.files.len(), 1);
    }

    #[test]
    fn test_no_match_error_display() {
        let err = Error::NoConfidentMatch {
            cleaned: "Up (2009)".to_string(),
            original: "Up.2009.mkv".to_string(),
        };
        assert!(err.is_no_match());
        assert_eq!(
            err.to_string(),
            "No confident match for \"Up (2009)\" (originally \"Up.2009.mkv\")"
        );
    }
}
