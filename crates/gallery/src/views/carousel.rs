//! Carousel rendering: stage, indicator dots, thumbnail strip

use crate::{
    fl,
    message::{Message, NavMessage},
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    iced_widget::scrollable::{Direction, Scrollbar},
    theme,
    widget::{
        button, column, container, horizontal_space, icon, image, image::Handle, mouse_area, row,
        scrollable, text, tooltip,
    },
};
use gallery_nav::{SlideState, SlideshowHandle};
use shared::SlideLabel;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CarouselView {
    pub thumbnail_size: f32,
}

impl Default for CarouselView {
    fn default() -> Self {
        Self {
            thumbnail_size: 72.0,
        }
    }
}

impl CarouselView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view<'a>(
        &self,
        slideshow: Option<&'a SlideshowHandle<PathBuf>>,
        is_scanning: bool,
    ) -> Element<'a, Message> {
        let Some(slideshow) = slideshow else {
            return placeholder(is_scanning);
        };

        let spacing = theme::active().cosmic().spacing;
        let state = slideshow.state();

        column()
            .push(stage(slideshow.current_item(), state))
            .push(indicators(state))
            .push(self.thumbnail_strip(slideshow.items(), state))
            .push(status_bar(state))
            .spacing(spacing.space_xs)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn thumbnail_strip<'a>(&self, items: &[PathBuf], state: SlideState) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;
        let size = self.thumbnail_size;

        let mut strip = row().spacing(spacing.space_xxs).align_y(Alignment::Center);

        for (idx, path) in items.iter().enumerate() {
            let thumb = image(Handle::from_path(path))
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(size))
                .height(Length::Fixed(size));

            let frame = container(thumb)
                .padding(spacing.space_xxxs)
                .class(if state.is_current(idx) {
                    theme::Container::Primary
                } else {
                    theme::Container::Transparent
                });

            let thumb = tooltip(
                mouse_area(frame).on_press(Message::Nav(NavMessage::GoTo(idx))),
                text::caption(SlideLabel::thumbnail(idx)),
                tooltip::Position::Top,
            );

            strip = strip.push(thumb);
        }

        container(
            scrollable(strip)
                .direction(Direction::Horizontal(Scrollbar::default()))
                .width(Length::Shrink),
        )
        .center_x(Length::Fill)
        .padding([0, spacing.space_s])
        .into()
    }
}

/// Accessible description of the photo on stage
fn stage_caption(state: SlideState) -> String {
    format!(
        "{}. {}",
        SlideLabel::image(state.index),
        SlideLabel::position(state.index, state.total)
    )
}

fn stage<'a>(current: &PathBuf, state: SlideState) -> Element<'a, Message> {
    let prev_btn = container(
        button::icon(icon::from_name("go-previous-symbolic")).on_press(Message::Nav(NavMessage::Prev)),
    )
    .width(Length::Shrink)
    .height(Length::Fill)
    .center_y(Length::Fill);

    let next_btn = container(
        button::icon(icon::from_name("go-next-symbolic")).on_press(Message::Nav(NavMessage::Next)),
    )
    .width(Length::Shrink)
    .height(Length::Fill)
    .center_y(Length::Fill);

    let photo = image(Handle::from_path(current))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    row()
        .push(prev_btn)
        .push(tooltip(
            container(photo).center(Length::Fill),
            text::caption(stage_caption(state)),
            tooltip::Position::FollowCursor,
        ))
        .push(next_btn)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn indicators<'a>(state: SlideState) -> Element<'a, Message> {
    let mut dots = row().spacing(2);

    for idx in 0..state.total {
        let name = if state.is_current(idx) {
            "radio-checked-symbolic"
        } else {
            "radio-symbolic"
        };

        dots = dots.push(
            button::icon(icon::from_name(name))
                .padding(2)
                .on_press(Message::Nav(NavMessage::GoTo(idx))),
        );
    }

    container(dots).center_x(Length::Fill).into()
}

fn status_bar<'a>(state: SlideState) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let play_icon = if state.playing {
        "media-playback-pause-symbolic"
    } else {
        "media-playback-start-symbolic"
    };

    row()
        .push(text(SlideLabel::position(state.index, state.total)).size(12))
        .push(horizontal_space())
        .push(button::icon(icon::from_name(play_icon)).on_press(Message::Nav(NavMessage::TogglePlay)))
        .align_y(Alignment::Center)
        .padding([spacing.space_xxs, spacing.space_s])
        .into()
}

fn placeholder<'a>(is_scanning: bool) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let (icon_name, label) = if is_scanning {
        ("content-loading-symbolic", fl!("status-scanning"))
    } else {
        ("folder-pictures-symbolic", fl!("status-no-images"))
    };

    container(
        column()
            .push(icon::from_name(icon_name).size(64))
            .push(text(label).size(16))
            .push(button::standard(fl!("menu-open-folder")).on_press(Message::OpenFolderDialog))
            .spacing(spacing.space_m)
            .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_caption_numbers_from_one() {
        let state = SlideState {
            index: 2,
            total: 8,
            playing: true,
        };
        assert_eq!(stage_caption(state), "Gallery image 3. Slide 3 of 8");
    }

    #[test]
    fn test_stage_caption_last_slide() {
        let state = SlideState {
            index: 7,
            total: 8,
            playing: false,
        };
        assert_eq!(stage_caption(state), "Gallery image 8. Slide 8 of 8");
    }
}
