use gallery_config::AppTheme;
use gallery_nav::SlideState;
use std::path::PathBuf;

pub use crate::key_binds::MenuAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextPage {
    About,
    Settings,
}

#[derive(Debug, Clone)]
pub enum Message {
    Nav(NavMessage),
    Gallery(GalleryMessage),
    Settings(SettingsMessage),
    KeyBind(MenuAction),
    ToggleContextPage(ContextPage),
    OpenFolderDialog,
    OpenPath(PathBuf),
    Cancelled,
    WatcherEvent(crate::watcher::WatcherEvent),
    Quit,
    Surface(cosmic::surface::Action),
}

#[derive(Debug, Clone)]
pub enum NavMessage {
    Next,
    Prev,
    First,
    Last,
    GoTo(usize),
    TogglePlay,
}

#[derive(Debug, Clone)]
pub enum GalleryMessage {
    /// Directory listing finished; `focus` is the photo to open on, if any
    Scanned {
        dir: PathBuf,
        images: Vec<PathBuf>,
        focus: Option<PathBuf>,
    },
    /// Published by the running slideshow
    SlideChanged(SlideState),
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    AppTheme(AppTheme),
    TickInterval(u32),
    Autoplay(bool),
    ShowHiddenFiles(bool),
    RememberLastDir(bool),
}
