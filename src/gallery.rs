// SPDX-License-Identifier: MPL-2.0
//! Gallery model: the ordered set of images the page is built from.
//!
//! A gallery comes either from a `gallery.toml` manifest (the caller-supplied
//! markup, listing entries in display order with optional album tags) or from
//! scanning a folder, where each immediate subdirectory becomes an album.
//! Album membership is always re-derived from the live entry list
//! (`album_entries`), never cached, so galleries can be reloaded or rescanned
//! between lightbox opens without invalidation logic.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest file looked up inside a gallery directory.
pub const MANIFEST_FILE: &str = "gallery.toml";

const SUPPORTED_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

/// One image of the gallery. `album` is the group identifier shared by the
/// images that form a carousel; entries without a tag never open the lightbox.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry {
    pub path: PathBuf,
    pub album: Option<String>,
    pub title: Option<String>,
}

impl ImageEntry {
    /// Display name used in captions and badges.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    images: Vec<ManifestImage>,
}

#[derive(Debug, Deserialize)]
struct ManifestImage {
    path: PathBuf,
    #[serde(default)]
    album: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// An ordered sequence of gallery images ("document order").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    entries: Vec<ImageEntry>,
}

impl Gallery {
    /// Creates an empty gallery.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a gallery from already-assembled entries, preserving order.
    #[must_use]
    pub fn from_entries(entries: Vec<ImageEntry>) -> Self {
        Self { entries }
    }

    /// Loads a gallery from a manifest file or a directory.
    ///
    /// A directory containing a `gallery.toml` is loaded through the
    /// manifest; otherwise it is scanned.
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_file() {
            return Self::from_manifest(path);
        }
        if path.is_dir() {
            let manifest = path.join(MANIFEST_FILE);
            if manifest.is_file() {
                return Self::from_manifest(&manifest);
            }
            return Self::scan_directory(path);
        }
        Err(Error::Gallery(format!(
            "no gallery at {}",
            path.display()
        )))
    }

    /// Loads a TOML manifest. Relative image paths are resolved against the
    /// manifest's directory. Blank album tags are treated as untagged, so a
    /// manifest cannot accidentally group images under an empty identifier.
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest: Manifest =
            toml::from_str(&content).map_err(|err| Error::Gallery(err.to_string()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let entries = manifest
            .images
            .into_iter()
            .map(|image| ImageEntry {
                path: if image.path.is_absolute() {
                    image.path
                } else {
                    base.join(image.path)
                },
                album: normalize_tag(image.album),
                title: image.title,
            })
            .collect();

        Ok(Self { entries })
    }

    /// Scans a directory for supported images, sorted alphabetically.
    ///
    /// Loose files at the top level carry no album tag; images inside an
    /// immediate subdirectory are tagged with that subdirectory's name.
    /// Subdirectories follow the loose files, in name order.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let mut entries = Vec::new();
        let mut albums = Vec::new();

        for dir_entry in std::fs::read_dir(directory)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();

            if path.is_file() && is_supported_image(&path) {
                entries.push(ImageEntry {
                    path,
                    album: None,
                    title: None,
                });
            } else if path.is_dir() {
                albums.push(path);
            }
        }

        sort_by_file_name(&mut entries);
        albums.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for album_dir in albums {
            let tag = album_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());

            let mut album_entries = Vec::new();
            for dir_entry in std::fs::read_dir(&album_dir)? {
                let dir_entry = dir_entry?;
                let path = dir_entry.path();
                if path.is_file() && is_supported_image(&path) {
                    album_entries.push(ImageEntry {
                        path,
                        album: normalize_tag(tag.clone()),
                        title: None,
                    });
                }
            }
            sort_by_file_name(&mut album_entries);
            entries.extend(album_entries);
        }

        Ok(Self { entries })
    }

    /// Returns all entries in document order.
    #[must_use]
    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    /// Returns the entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Returns a fresh snapshot of all entries sharing `tag`, in document
    /// order. This is the refresh-on-open query the lightbox relies on.
    #[must_use]
    pub fn album_entries(&self, tag: &str) -> Vec<ImageEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.album.as_deref() == Some(tag))
            .cloned()
            .collect()
    }

    /// Returns the total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the gallery has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_tag(tag: Option<String>) -> Option<String> {
    tag.filter(|value| !value.trim().is_empty())
}

fn sort_by_file_name(entries: &mut [ImageEntry]) {
    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_tags_subdirectory_images_with_album() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "loose.png");
        let album_dir = temp_dir.path().join("mountains");
        fs::create_dir(&album_dir).expect("failed to create album dir");
        create_test_image(&album_dir, "a.jpg");
        create_test_image(&album_dir, "b.jpg");

        let gallery = Gallery::scan_directory(temp_dir.path()).expect("scan failed");

        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.get(0).unwrap().album, None);
        assert_eq!(gallery.get(1).unwrap().album.as_deref(), Some("mountains"));
        assert_eq!(gallery.get(2).unwrap().album.as_deref(), Some("mountains"));
    }

    #[test]
    fn scan_directory_skips_unsupported_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "photo.jpg");
        create_test_image(temp_dir.path(), "notes.txt");

        let gallery = Gallery::scan_directory(temp_dir.path()).expect("scan failed");

        assert_eq!(gallery.len(), 1);
        assert!(gallery.get(0).unwrap().path.ends_with("photo.jpg"));
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "c.png");
        create_test_image(temp_dir.path(), "a.png");
        create_test_image(temp_dir.path(), "b.png");

        let gallery = Gallery::scan_directory(temp_dir.path()).expect("scan failed");

        let names: Vec<String> = gallery
            .entries()
            .iter()
            .map(ImageEntry::display_name)
            .collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn from_manifest_resolves_relative_paths_in_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest = temp_dir.path().join(MANIFEST_FILE);
        fs::write(
            &manifest,
            r#"
[[images]]
path = "pics/a.jpg"
album = "trip"
title = "Sunrise"

[[images]]
path = "pics/b.jpg"
album = "trip"

[[images]]
path = "banner.png"
"#,
        )
        .expect("failed to write manifest");

        let gallery = Gallery::from_manifest(&manifest).expect("manifest load failed");

        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.get(0).unwrap().path, temp_dir.path().join("pics/a.jpg"));
        assert_eq!(gallery.get(0).unwrap().display_name(), "Sunrise");
        assert_eq!(gallery.get(1).unwrap().album.as_deref(), Some("trip"));
        assert_eq!(gallery.get(2).unwrap().album, None);
    }

    #[test]
    fn from_manifest_treats_blank_album_as_untagged() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest = temp_dir.path().join(MANIFEST_FILE);
        fs::write(&manifest, "[[images]]\npath = \"a.jpg\"\nalbum = \"  \"\n")
            .expect("failed to write manifest");

        let gallery = Gallery::from_manifest(&manifest).expect("manifest load failed");
        assert_eq!(gallery.get(0).unwrap().album, None);
    }

    #[test]
    fn from_manifest_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest = temp_dir.path().join(MANIFEST_FILE);
        fs::write(&manifest, "[[images]\npath=").expect("failed to write manifest");

        let err = Gallery::from_manifest(&manifest).unwrap_err();
        assert!(matches!(err, Error::Gallery(_)));
    }

    #[test]
    fn load_prefers_manifest_inside_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "ignored-by-manifest.png");
        fs::write(
            temp_dir.path().join(MANIFEST_FILE),
            "[[images]]\npath = \"chosen.jpg\"\n",
        )
        .expect("failed to write manifest");

        let gallery = Gallery::load(temp_dir.path()).expect("load failed");

        assert_eq!(gallery.len(), 1);
        assert!(gallery.get(0).unwrap().path.ends_with("chosen.jpg"));
    }

    #[test]
    fn load_missing_path_is_a_gallery_error() {
        let err = Gallery::load(Path::new("/nonexistent/gallery")).unwrap_err();
        assert!(matches!(err, Error::Gallery(_)));
    }

    #[test]
    fn album_entries_preserves_document_order_across_albums() {
        let gallery = Gallery::from_entries(vec![
            ImageEntry {
                path: PathBuf::from("a.jpg"),
                album: Some("trip".into()),
                title: None,
            },
            ImageEntry {
                path: PathBuf::from("other.jpg"),
                album: Some("pets".into()),
                title: None,
            },
            ImageEntry {
                path: PathBuf::from("b.jpg"),
                album: Some("trip".into()),
                title: None,
            },
        ]);

        let trip = gallery.album_entries("trip");
        assert_eq!(trip.len(), 2);
        assert_eq!(trip[0].path, PathBuf::from("a.jpg"));
        assert_eq!(trip[1].path, PathBuf::from("b.jpg"));
        assert!(gallery.album_entries("nowhere").is_empty());
    }
}
