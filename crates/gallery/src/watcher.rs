//! Subscriptions feeding outside events into the app

use cosmic::iced::Subscription;
use gallery_nav::{SlideState, SlideshowHandle, is_supported_image};
use notify::{
    Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, event::ModifyKind,
};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum WatcherEvent {
    /// A photo was added to or removed from the gallery directory
    GalleryChanged(PathBuf),
    Error(String),
}

/// Watch the gallery directory for photos coming and going
pub fn watch_gallery(dir: Option<PathBuf>) -> Subscription<WatcherEvent> {
    Subscription::run_with_id(
        dir.clone(),
        cosmic::iced::stream::channel(100, move |mut output| async move {
            use cosmic::iced_futures::futures::SinkExt;

            let Some(dir) = dir else {
                std::future::pending::<()>().await;
                unreachable!()
            };

            let (tx, mut rx) = mpsc::channel(100);

            let watcher_result = RecommendedWatcher::new(
                move |res: Result<Event, notify::Error>| {
                    let _ = tx.blocking_send(res);
                },
                Config::default(),
            );

            let mut watcher = match watcher_result {
                Ok(watcher) => watcher,
                Err(e) => {
                    let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                    std::future::pending::<()>().await;
                    unreachable!();
                }
            };

            if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
                let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                std::future::pending::<()>().await;
                unreachable!();
            }

            while let Some(event_result) = rx.recv().await {
                match event_result {
                    Ok(event) => {
                        if !matches!(
                            event.kind,
                            EventKind::Create(_)
                                | EventKind::Remove(_)
                                | EventKind::Modify(ModifyKind::Name(_))
                        ) {
                            continue;
                        }

                        for path in event.paths.into_iter().filter(|p| is_supported_image(p)) {
                            let _ = output.send(WatcherEvent::GalleryChanged(path)).await;
                        }
                    }
                    Err(e) => {
                        let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                    }
                }
            }

            std::future::pending::<()>().await;
            unreachable!()
        }),
    )
}

/// Forward a slideshow's position changes.
///
/// Keyed by slideshow id, so mounting a new slideshow replaces the stream
/// and a torn down one stops producing.
pub fn slide_changes(slideshow: &SlideshowHandle<PathBuf>) -> Subscription<SlideState> {
    let mut rx = slideshow.subscribe();

    Subscription::run_with_id(
        slideshow.id(),
        cosmic::iced::stream::channel(16, move |mut output| async move {
            use cosmic::iced_futures::futures::SinkExt;

            while rx.changed().await.is_ok() {
                let state = *rx.borrow_and_update();
                if output.send(state).await.is_err() {
                    break;
                }
            }

            std::future::pending::<()>().await;
            unreachable!()
        }),
    )
}
