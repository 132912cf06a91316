//! Gallery directory scanning

use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};
use tokio::task::spawn_blocking;

/// File extensions shown in the gallery
pub const EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "tif", "avif",
];

/// Resolve a file or directory argument to the directory holding the photos
pub fn get_gallery_dir(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        path.parent().map(|par| par.to_path_buf())
    } else if path.is_dir() {
        Some(path.to_path_buf())
    } else {
        None
    }
}

/// List the gallery images in `dir`, in natural name order
pub async fn scan_dir(dir: &Path, include_hidden: bool) -> Vec<PathBuf> {
    let dir = dir.to_path_buf();

    match spawn_blocking(move || scan_dir_sync(&dir, include_hidden)).await {
        Ok(images) => images,
        Err(e) => {
            tracing::warn!("Gallery scan task failed: {e}");
            Vec::new()
        }
    }
}

fn scan_dir_sync(dir: &Path, include_hidden: bool) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot read gallery directory {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            if !include_hidden
                && let Some(name) = path.file_name().and_then(|name| name.to_str())
                && name.starts_with('.')
            {
                return false;
            }
            path.is_file() && is_supported_image(path)
        })
        .collect();

    images.sort_by(|a, b| {
        let a_name = a.file_name().and_then(|name| name.to_str()).unwrap_or("");
        let b_name = b.file_name().and_then(|name| name.to_str()).unwrap_or("");
        natural_cmp(a_name, b_name)
    });

    tracing::debug!("Found {} gallery images in {}", images.len(), dir.display());
    images
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Digit runs compare by value, everything else case-insensitively.
///
/// Names that only differ in zero padding or case fall back to byte order,
/// so the result never depends on directory listing order.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    chunked_cmp(a, b).then_with(|| a.cmp(b))
}

fn chunked_cmp(a: &str, b: &str) -> Ordering {
    let mut a_rest = a;
    let mut b_rest = b;

    loop {
        let (a_chunk, a_tail) = next_chunk(a_rest);
        let (b_chunk, b_tail) = next_chunk(b_rest);

        let ordering = match (a_chunk, b_chunk) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => {
                let x = x.trim_start_matches('0');
                let y = y.trim_start_matches('0');
                x.len().cmp(&y.len()).then_with(|| x.cmp(y))
            }
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => x
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(y.chars().flat_map(char::to_lowercase)),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }

        a_rest = a_tail;
        b_rest = b_tail;
    }
}

enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn next_chunk(s: &str) -> (Option<Chunk<'_>>, &str) {
    let Some(first) = s.chars().next() else {
        return (None, s);
    };

    let is_digit = first.is_ascii_digit();
    let end = s
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit() != is_digit)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());

    let (chunk, tail) = s.split_at(end);
    let chunk = if is_digit {
        Chunk::Digits(chunk)
    } else {
        Chunk::Text(chunk)
    };

    (Some(chunk), tail)
}
