#[cfg(test)]
mod tests {
    use gallery_nav::{Carousel, get_gallery_dir, scan_dir};
    use std::{fs, path::PathBuf};

    fn touch(dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"not really an image").unwrap();
        path
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect()
    }

    #[tokio::test]
    async fn test_scan_orders_numbered_photos() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["10.jpg", "2.jpg", "1.jpg", "3.png", "notes.txt"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let images = scan_dir(dir.path(), false).await;

        assert_eq!(names(&images), vec!["1.jpg", "2.jpg", "3.png", "10.jpg"]);
    }

    #[tokio::test]
    async fn test_hidden_files_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".draft.jpg");
        touch(dir.path(), "final.jpg");

        assert_eq!(names(&scan_dir(dir.path(), false).await), vec!["final.jpg"]);
        assert_eq!(
            names(&scan_dir(dir.path(), true).await),
            vec![".draft.jpg", "final.jpg"]
        );
    }

    #[tokio::test]
    async fn test_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let images = scan_dir(&dir.path().join("gone"), false).await;
        assert!(images.is_empty());
        assert!(Carousel::new(images).is_err());
    }

    #[test]
    fn test_gallery_dir_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let photo = touch(dir.path(), "1.jpg");

        assert_eq!(get_gallery_dir(&photo), Some(dir.path().to_path_buf()));
        assert_eq!(get_gallery_dir(dir.path()), Some(dir.path().to_path_buf()));
        assert_eq!(get_gallery_dir(&dir.path().join("missing")), None);
    }
}
