use gallery_config::{APP_ID, CONFIG_VERSION, GalleryConfig};
use std::time::Duration;

#[test]
fn test_app_id_is_reverse_dns() {
    // Shared by the application and the settings store
    assert_eq!(APP_ID, "io.github.vows.Vows");
    assert_eq!(APP_ID.split('.').count(), 4);
    assert_eq!(CONFIG_VERSION, 1);
}

#[test]
fn test_interval_seconds_are_clamped() {
    let mut cfg = GalleryConfig::default();

    cfg.set_tick_interval_secs(0);
    assert_eq!(cfg.tick_interval(), Duration::from_secs(1));

    cfg.set_tick_interval_secs(600);
    assert_eq!(cfg.tick_interval_secs(), 60);
}
