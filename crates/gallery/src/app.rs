//! Main app state

use crate::{
    fl,
    key_binds::{self, MenuAction},
    menu::menu_bar,
    message::{ContextPage, GalleryMessage, Message, NavMessage, SettingsMessage},
    views::CarouselView,
    watcher,
};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    app::context_drawer,
    cosmic_config::{Config, CosmicConfigEntry},
    iced::keyboard::{Key, Modifiers},
    iced_widget::toggler,
    task::future,
    widget::{
        column, dropdown,
        menu::key_bind::{KeyBind, Modifier},
        settings, spin_button, text,
    },
};
use gallery_config::{AppTheme, GalleryConfig, MAX_TICK_SECS, MIN_TICK_SECS};
use gallery_nav::{self as nav, Carousel, Slideshow, SlideshowHandle};
use rfd::AsyncFileDialog;
use shared::{MediaRef, SlideLabel};
use std::{collections::HashMap, path::PathBuf, sync::Arc};

/// Directory scan progress, remembering changes seen mid-scan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum ScanStatus {
    #[default]
    Idle,
    Scanning,
    /// The directory changed after the running scan listed it
    Stale,
}

impl ScanStatus {
    fn is_scanning(self) -> bool {
        self != ScanStatus::Idle
    }

    fn start(&mut self) {
        *self = ScanStatus::Scanning;
    }

    /// A change was reported; true when a rescan should start right away
    fn request(&mut self) -> bool {
        if self.is_scanning() {
            *self = ScanStatus::Stale;
            false
        } else {
            true
        }
    }

    /// The running scan completed; true when its result is already outdated
    fn finish(&mut self) -> bool {
        let stale = *self == ScanStatus::Stale;
        *self = ScanStatus::Idle;
        stale
    }
}

pub struct GalleryApp {
    core: Core,
    config: GalleryConfig,
    config_handler: Option<Config>,
    key_binds: HashMap<KeyBind, MenuAction>,
    gallery_dir: Option<PathBuf>,
    slideshow: Option<SlideshowHandle<PathBuf>>,
    carousel_view: CarouselView,
    context_page: Option<ContextPage>,
    scan: ScanStatus,
}

impl GalleryApp {
    fn save_config(&self) {
        if let Some(ref handler) = self.config_handler
            && let Err(e) = self.config.write_entry(handler)
        {
            tracing::warn!("Failed to save settings: {e}");
        }
    }

    fn is_playing(&self) -> bool {
        self.slideshow
            .as_ref()
            .is_some_and(|slideshow| slideshow.state().playing)
    }

    /// List the photos next to `path`, opening on `path` itself when it is a file
    fn scan_gallery(&mut self, path: PathBuf) -> Task<Action<Message>> {
        let Some(dir) = nav::get_gallery_dir(&path) else {
            tracing::warn!("Not a gallery location: {}", path.display());
            return Task::none();
        };

        let focus = path.is_file().then_some(path);
        let include_hidden = self.config.show_hidden_files;

        if self.config.remember_last_dir
            && let Some(dir_str) = dir.to_str()
        {
            self.config.last_dir = Some(dir_str.to_string());
            self.save_config();
        }

        self.gallery_dir = Some(dir.clone());
        self.scan.start();

        future(async move {
            let images = nav::scan_dir(&dir, include_hidden).await;
            Message::Gallery(GalleryMessage::Scanned { dir, images, focus })
        })
    }

    fn rescan(&mut self) -> Task<Action<Message>> {
        match self.gallery_dir.clone() {
            Some(dir) => self.scan_gallery(dir),
            None => Task::none(),
        }
    }

    /// Replace the running slideshow.
    ///
    /// Items are fixed for a slideshow's lifetime, so any change to the
    /// list or the interval tears the old driver down first.
    fn mount_slideshow(&mut self, items: Arc<[PathBuf]>, focus: Option<&PathBuf>, playing: bool) {
        if let Some(old) = self.slideshow.take() {
            tracing::debug!(id = old.id(), "tearing down slideshow");
        }

        let mut carousel = match Carousel::new(items)
            .and_then(|carousel| carousel.with_tick_interval(self.config.tick_interval()))
        {
            Ok(carousel) => carousel,
            Err(e) => {
                tracing::info!("No slideshow mounted: {e}");
                return;
            }
        };

        if let Some(focus) = focus
            && let Some(idx) = carousel.items().iter().position(|item| item == focus)
        {
            carousel.select_index(idx);
        }

        let slideshow = if playing {
            Slideshow::new(carousel)
        } else {
            Slideshow::new(carousel).paused()
        };

        match slideshow.spawn() {
            Ok(handle) => self.slideshow = Some(handle),
            Err(e) => tracing::error!("Failed to start slideshow: {e}"),
        }
    }

    /// Remount over the same items, keeping position and playback
    fn remount(&mut self) {
        let Some(old) = self.slideshow.take() else {
            return;
        };

        let items = Arc::clone(old.items());
        let focus = old.current_item().clone();
        let playing = old.state().playing;
        drop(old);

        self.mount_slideshow(items, Some(&focus), playing);
    }

    fn update_title(&mut self) -> Task<Action<Message>> {
        let Some(window_id) = self.core.main_window_id() else {
            return Task::none();
        };

        let title = match self.slideshow {
            Some(ref slideshow) => {
                let state = slideshow.state();
                format!(
                    "{} ({}) - {}",
                    MediaRef::from(slideshow.current_item().clone()).display_name(),
                    SlideLabel::position(state.index, state.total),
                    fl!("app-title")
                )
            }
            None => fl!("app-title"),
        };

        self.set_window_title(title, window_id)
    }

    fn navigate(&mut self, nav_msg: NavMessage) {
        let Some(ref slideshow) = self.slideshow else {
            return;
        };

        match nav_msg {
            NavMessage::Next => slideshow.advance(),
            NavMessage::Prev => slideshow.retreat(),
            NavMessage::First => slideshow.select_index(0),
            NavMessage::Last => slideshow.select_index(slideshow.items().len().saturating_sub(1)),
            NavMessage::GoTo(idx) => slideshow.select_index(idx),
            NavMessage::TogglePlay => slideshow.toggle(),
        }
    }
}

impl Application for GalleryApp {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = gallery_config::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let mut tasks = vec![];

        let (config, config_handler) = match gallery_config::config() {
            Ok(handler) => {
                let config = match GalleryConfig::get_entry(&handler) {
                    Ok(c) => c,
                    Err((errs, c)) => {
                        tracing::debug!("Using defaults for {} settings", errs.len());
                        c
                    }
                };
                (config, Some(handler))
            }
            Err(e) => {
                tracing::warn!("Settings unavailable, using defaults: {e}");
                (GalleryConfig::default(), None)
            }
        };

        let mut app = Self {
            core,
            config,
            config_handler,
            key_binds: key_binds::init_key_binds(),
            gallery_dir: None,
            slideshow: None,
            carousel_view: CarouselView::new(),
            context_page: None,
            scan: ScanStatus::default(),
        };

        let startup_path = if let Some(path) = flags {
            Some(path)
        } else if app.config.remember_last_dir {
            app.config.last_dir.as_ref().map(PathBuf::from)
        } else {
            None
        };

        let startup_path = startup_path.or_else(dirs::picture_dir);

        tasks.push(cosmic::command::set_theme(
            app.config.app_theme.to_cosmic_theme(),
        ));
        tasks.push(app.update_title());

        if let Some(path) = startup_path {
            tasks.push(app.scan_gallery(path));
        }

        (app, Task::batch(tasks))
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![menu_bar(&self.core, &self.key_binds, self.is_playing())]
    }

    fn view(&self) -> Element<'_, Self::Message> {
        self.carousel_view
            .view(self.slideshow.as_ref(), self.scan.is_scanning())
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        let mut tasks = Vec::new();

        match message {
            Message::Nav(nav_msg) => self.navigate(nav_msg),
            Message::Gallery(gallery_msg) => match gallery_msg {
                GalleryMessage::Scanned { dir, images, focus } => {
                    if self.gallery_dir.as_ref() != Some(&dir) {
                        tracing::debug!("Ignoring stale scan of {}", dir.display());
                        return Task::none();
                    }

                    let stale = self.scan.finish();
                    tracing::info!("Found {} photos in {}", images.len(), dir.display());

                    // A rescan keeps whatever is on screen
                    let (focus, playing) = match self.slideshow {
                        Some(ref old) => (
                            focus.or_else(|| Some(old.current_item().clone())),
                            old.state().playing,
                        ),
                        None => (focus, self.config.autoplay),
                    };

                    self.mount_slideshow(images.into(), focus.as_ref(), playing);
                    tasks.push(self.update_title());

                    if stale {
                        tracing::debug!("Gallery changed during scan, rescanning");
                        tasks.push(self.rescan());
                    }
                }
                GalleryMessage::SlideChanged(_) => tasks.push(self.update_title()),
            },
            Message::Settings(settings_msg) => {
                match settings_msg {
                    SettingsMessage::AppTheme(theme) => {
                        self.config.app_theme = theme;
                        tasks.push(cosmic::command::set_theme(theme.to_cosmic_theme()));
                    }
                    SettingsMessage::TickInterval(secs) => {
                        self.config.set_tick_interval_secs(secs);
                        self.remount();
                    }
                    SettingsMessage::Autoplay(autoplay) => self.config.autoplay = autoplay,
                    SettingsMessage::ShowHiddenFiles(show) => {
                        self.config.show_hidden_files = show;
                        tasks.push(self.rescan());
                    }
                    SettingsMessage::RememberLastDir(remember) => {
                        self.config.remember_last_dir = remember;
                        if !remember {
                            self.config.last_dir = None;
                        }
                    }
                }

                self.save_config();
            }
            Message::KeyBind(action) => tasks.push(self.update(action.message())),
            Message::Surface(action) => {
                return cosmic::task::message(Action::Cosmic(cosmic::app::Action::Surface(action)));
            }
            Message::ToggleContextPage(page) => {
                if self.context_page == Some(page) {
                    self.context_page = None;
                } else {
                    self.context_page = Some(page);
                }
            }
            Message::OpenFolderDialog => {
                return future(async {
                    let dialog = AsyncFileDialog::new().set_title(fl!("menu-open-folder"));

                    match dialog.pick_folder().await {
                        Some(handle) => Message::OpenPath(handle.path().to_path_buf()),
                        None => Message::Cancelled,
                    }
                });
            }
            Message::OpenPath(path) => tasks.push(self.scan_gallery(path)),
            Message::Cancelled => {}
            Message::WatcherEvent(evt) => match evt {
                watcher::WatcherEvent::GalleryChanged(path) => {
                    tracing::debug!("Gallery changed: {}", path.display());
                    if self.scan.request() {
                        tasks.push(self.rescan());
                    }
                }
                watcher::WatcherEvent::Error(e) => tracing::warn!("Directory watcher: {e}"),
            },
            Message::Quit => {
                self.slideshow = None;
                self.save_config();
                return cosmic::iced::exit();
            }
        }

        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        let page = self.context_page?;
        let content = match page {
            ContextPage::About => self.about_page(),
            ContextPage::Settings => self.settings_page(),
        };

        Some(context_drawer::context_drawer(
            content,
            Message::ToggleContextPage(page),
        ))
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Self::Message> {
        let watcher_sub = watcher::watch_gallery(self.gallery_dir.clone()).map(Message::WatcherEvent);

        let slide_sub = match self.slideshow {
            Some(ref slideshow) => watcher::slide_changes(slideshow)
                .map(|state| Message::Gallery(GalleryMessage::SlideChanged(state))),
            None => cosmic::iced::Subscription::none(),
        };

        cosmic::iced::Subscription::batch([
            cosmic::iced::keyboard::on_key_press(key_press_handler),
            watcher_sub,
            slide_sub,
        ])
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        self.slideshow = None;
        self.save_config();

        None
    }
}

impl GalleryApp {
    fn about_page(&self) -> Element<'_, Message> {
        let mut content = column()
            .push(text::title3(fl!("app-title")))
            .push(text::body(fl!("app-description")));

        if let Some(ref url) = self.config.video_url {
            content = content
                .push(text::heading(fl!("about-video")))
                .push(text::caption(MediaRef::Video(url.clone()).display_name()));
        }

        content
            .push(text::caption(format!("Version {}", env!("CARGO_PKG_VERSION"))))
            .spacing(cosmic::theme::active().cosmic().spacing.space_s)
            .into()
    }

    fn settings_page(&self) -> Element<'_, Message> {
        let interval = self.config.tick_interval_secs();

        let sections = vec![
            settings::section()
                .title(fl!("settings-appearance"))
                .add(settings::item(
                    fl!("settings-theme"),
                    dropdown(
                        AppTheme::ALL
                            .iter()
                            .map(|t| t.to_string())
                            .collect::<Vec<_>>(),
                        AppTheme::ALL
                            .iter()
                            .position(|t| *t == self.config.app_theme),
                        |idx| Message::Settings(SettingsMessage::AppTheme(AppTheme::ALL[idx])),
                    ),
                ))
                .into(),
            settings::section()
                .title(fl!("settings-slideshow"))
                .add(settings::item(
                    fl!("settings-slideshow-interval"),
                    spin_button(
                        format!("{interval}"),
                        fl!("settings-slideshow-interval"),
                        interval,
                        1,
                        MIN_TICK_SECS,
                        MAX_TICK_SECS,
                        |secs| Message::Settings(SettingsMessage::TickInterval(secs)),
                    ),
                ))
                .add(settings::item(
                    fl!("settings-autoplay"),
                    toggler(self.config.autoplay)
                        .on_toggle(|on| Message::Settings(SettingsMessage::Autoplay(on))),
                ))
                .into(),
            settings::section()
                .title(fl!("settings-gallery"))
                .add(settings::item(
                    fl!("settings-show-hidden"),
                    toggler(self.config.show_hidden_files).on_toggle(|show| {
                        Message::Settings(SettingsMessage::ShowHiddenFiles(show))
                    }),
                ))
                .add(settings::item(
                    fl!("settings-remember-last-dir"),
                    toggler(self.config.remember_last_dir).on_toggle(|remember| {
                        Message::Settings(SettingsMessage::RememberLastDir(remember))
                    }),
                ))
                .into(),
        ];

        settings::view_column(sections).into()
    }
}

fn key_press_handler(key: Key, modifiers: Modifiers) -> Option<Message> {
    let mut mods = Vec::new();

    if modifiers.control() {
        mods.push(Modifier::Ctrl);
    }

    if modifiers.shift() {
        mods.push(Modifier::Shift);
    }

    if modifiers.alt() {
        mods.push(Modifier::Alt);
    }

    if modifiers.logo() {
        mods.push(Modifier::Super);
    }

    let key_bind = KeyBind {
        modifiers: mods,
        key,
    };

    key_binds::init_key_binds()
        .get(&key_bind)
        .map(|action| Message::KeyBind(*action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_while_idle_rescans_now() {
        let mut scan = ScanStatus::default();
        assert!(!scan.is_scanning());
        assert!(scan.request());
    }

    #[test]
    fn test_change_during_scan_is_deferred() {
        let mut scan = ScanStatus::default();
        scan.start();

        // Several events during one scan collapse into one follow-up
        assert!(!scan.request());
        assert!(!scan.request());
        assert!(scan.is_scanning());

        assert!(scan.finish());
        assert!(!scan.is_scanning());
    }

    #[test]
    fn test_quiet_scan_needs_no_follow_up() {
        let mut scan = ScanStatus::default();
        scan.start();
        assert!(!scan.finish());
        assert_eq!(scan, ScanStatus::Idle);
    }
}
