use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DRIVE_FILE_MARKER: &str = "/file/d/";

/// An opaque reference to something the gallery can show
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaRef {
    Image(PathBuf),
    Video(String),
}

impl MediaRef {
    /// File name for images, embed URL for videos
    pub fn display_name(&self) -> String {
        match self {
            MediaRef::Image(path) => path
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string)
                .unwrap_or_else(|| path.display().to_string()),
            MediaRef::Video(url) => drive_embed_url(url),
        }
    }
}

impl From<PathBuf> for MediaRef {
    fn from(path: PathBuf) -> Self {
        MediaRef::Image(path)
    }
}

/// Turn a Google Drive share link into its `/preview` embed form.
///
/// `https://drive.google.com/file/d/<id>/view?usp=sharing` becomes
/// `https://drive.google.com/file/d/<id>/preview`. Anything that does not
/// carry a `/file/d/<id>` segment is returned unchanged.
pub fn drive_embed_url(url: &str) -> String {
    let Some(start) = url.find(DRIVE_FILE_MARKER) else {
        return url.to_string();
    };

    let rest = &url[start + DRIVE_FILE_MARKER.len()..];
    let id = rest.split('/').next().unwrap_or_default();

    if id.is_empty() {
        return url.to_string();
    }

    format!("https://drive.google.com/file/d/{id}/preview")
}
