//! The window's menu bar (File, Options and View) and the keyboard shortcuts
//! of its items.

use egui::{Button, Key, KeyboardShortcut, Modifiers, Ui};

use crate::action::{Action, ActionSlot, Collision};

/// A clickable menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub shortcut: Option<KeyboardShortcut>,
    pub action: Action,
}

/// One line of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Entry(MenuEntry),
    Separator,
}

const fn entry(
    label: &'static str,
    shortcut: Option<KeyboardShortcut>,
    action: Action,
) -> MenuItem {
    MenuItem::Entry(MenuEntry {
        label,
        shortcut,
        action,
    })
}

const fn command(key: Key) -> Option<KeyboardShortcut> {
    Some(KeyboardShortcut::new(Modifiers::COMMAND, key))
}

/// The menus, left to right, with their items.
pub const MENUS: &[(&str, &[MenuItem])] = &[
    (
        "File",
        &[
            entry("Open files", command(Key::O), Action::OpenFiles),
            entry("Open directory", None, Action::OpenDirectory),
            entry("Export", command(Key::S), Action::Export),
            MenuItem::Separator,
            entry("Quit", None, Action::Quit),
        ],
    ),
    ("Options", &[]),
    (
        "View",
        &[
            entry("Show debug info", command(Key::D), Action::ToggleDebugLog),
            entry("Report a bug", None, Action::ReportBug),
        ],
    ),
];

fn entries() -> impl Iterator<Item = &'static MenuEntry> {
    MENUS.iter().flat_map(|(_, items)| {
        items.iter().filter_map(|item| match item {
            MenuItem::Entry(entry) => Some(entry),
            MenuItem::Separator => None,
        })
    })
}

/// Draws the menu bar and checks the menu shortcuts, returning what was
/// requested this frame.
///
/// If more than one item fires in the same frame the last one wins (and the
/// replaced one is logged).
pub fn menu_bar(ui: &mut Ui) -> Option<Action> {
    let mut slot = ActionSlot::new(Collision::KeepLast);

    egui::MenuBar::new().ui(ui, |ui| {
        for (title, items) in MENUS {
            ui.menu_button(*title, |ui| {
                for item in *items {
                    match item {
                        MenuItem::Separator => {
                            ui.separator();
                        }
                        MenuItem::Entry(entry) => {
                            let mut button = Button::new(entry.label);
                            if let Some(shortcut) = &entry.shortcut {
                                button = button.shortcut_text(ui.ctx().format_shortcut(shortcut));
                            }

                            if ui.add(button).clicked() {
                                slot.offer(entry.action);
                                ui.close();
                            }
                        }
                    }
                }
            });
        }
    });

    for entry in entries() {
        if let Some(shortcut) = &entry.shortcut
            && util::ui::shortcut_pressed(ui.ctx(), shortcut)
        {
            slot.offer(entry.action);
        }
    }

    slot.take()
}
