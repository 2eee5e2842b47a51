//! Dark-mode preference storage and application.
//!
//! The stored preference only records an explicit light/dark choice;
//! without one the system preference tracked by
//! [`use_system_theme`](crate::hooks::use_system_theme) decides.

use web_sys::window;

use crate::ThemeMode;

const THEME_STORAGE_KEY: &str = "vektra.theme";

fn mode_label(mode: &ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
        ThemeMode::System => "system",
    }
}

fn mode_from_label(label: &str) -> ThemeMode {
    match label {
        "light" => ThemeMode::Light,
        "dark" => ThemeMode::Dark,
        _ => ThemeMode::System,
    }
}

pub fn stored_theme_mode() -> ThemeMode {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    match stored {
        Some(label) => mode_from_label(&label),
        None => ThemeMode::System,
    }
}

pub fn store_theme_mode(mode: &ThemeMode) {
    let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten())
    else {
        return;
    };
    match mode {
        // System is the absence of a preference.
        ThemeMode::System => {
            let _ = storage.remove_item(THEME_STORAGE_KEY);
        }
        mode => {
            let _ = storage.set_item(THEME_STORAGE_KEY, mode_label(mode));
        }
    }
}

/// Toggle the Tailwind `dark` class on the document element.
pub fn apply_dark_class(dark: bool) {
    let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if dark {
        let _ = html.class_list().add_1("dark");
    } else {
        let _ = html.class_list().remove_1("dark");
    }
}
