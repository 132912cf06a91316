use crate::message::{ContextPage, Message, NavMessage};
use cosmic::{
    iced::keyboard::{Key, key::Named},
    widget::menu::{
        Action,
        key_bind::{KeyBind, Modifier},
    },
};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    OpenFolder,
    Quit,
    Next,
    Prev,
    First,
    Last,
    TogglePlay,
    About,
    Settings,
}

impl MenuAction {
    pub fn message(self) -> Message {
        match self {
            MenuAction::OpenFolder => Message::OpenFolderDialog,
            MenuAction::Quit => Message::Quit,
            MenuAction::Next => Message::Nav(NavMessage::Next),
            MenuAction::Prev => Message::Nav(NavMessage::Prev),
            MenuAction::First => Message::Nav(NavMessage::First),
            MenuAction::Last => Message::Nav(NavMessage::Last),
            MenuAction::TogglePlay => Message::Nav(NavMessage::TogglePlay),
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
            MenuAction::Settings => Message::ToggleContextPage(ContextPage::Settings),
        }
    }
}

impl Action for MenuAction {
    type Message = Message;

    fn message(&self) -> Message {
        (*self).message()
    }
}

fn bind(binds: &mut HashMap<KeyBind, MenuAction>, modifiers: Vec<Modifier>, key: Key, action: MenuAction) {
    binds.insert(KeyBind { modifiers, key }, action);
}

pub fn init_key_binds() -> HashMap<KeyBind, MenuAction> {
    let mut binds = HashMap::new();

    bind(&mut binds, vec![Modifier::Ctrl], Key::Character("o".into()), MenuAction::OpenFolder);
    bind(&mut binds, vec![Modifier::Ctrl], Key::Character("q".into()), MenuAction::Quit);
    bind(&mut binds, vec![Modifier::Ctrl], Key::Character(",".into()), MenuAction::Settings);

    // Carousel
    bind(&mut binds, vec![], Key::Named(Named::ArrowLeft), MenuAction::Prev);
    bind(&mut binds, vec![], Key::Named(Named::ArrowRight), MenuAction::Next);
    bind(&mut binds, vec![], Key::Named(Named::Home), MenuAction::First);
    bind(&mut binds, vec![], Key::Named(Named::End), MenuAction::Last);
    bind(&mut binds, vec![], Key::Named(Named::Space), MenuAction::TogglePlay);

    binds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_drive_carousel() {
        let binds = init_key_binds();

        let right = KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::ArrowRight),
        };
        let left = KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::ArrowLeft),
        };

        assert_eq!(binds.get(&right), Some(&MenuAction::Next));
        assert_eq!(binds.get(&left), Some(&MenuAction::Prev));
    }

    #[test]
    fn test_space_toggles_playback() {
        let binds = init_key_binds();
        let space = KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::Space),
        };

        assert_eq!(binds.get(&space), Some(&MenuAction::TogglePlay));
        assert!(matches!(
            MenuAction::TogglePlay.message(),
            Message::Nav(NavMessage::TogglePlay)
        ));
    }
}
