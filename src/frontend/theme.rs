use gloo_storage::{LocalStorage, Storage};
use leptos::logging::warn;
use thaw::Theme as ThawTheme;
use verdict::theme::{THEME_STORAGE_KEY, Theme};

/// Thaw UI theme matching the app theme
pub fn to_thaw_theme(theme: Theme) -> ThawTheme {
    if theme.is_light() {
        ThawTheme::light()
    } else {
        ThawTheme::dark()
    }
}

/// Load theme from localStorage.
///
/// The preference is stored as the bare string (`dark`/`light`), not JSON.
pub fn load_theme_from_storage() -> Theme {
    let stored = LocalStorage::raw().get_item(THEME_STORAGE_KEY).ok().flatten();
    Theme::from_stored(stored.as_deref())
}

/// Save theme to localStorage
pub fn save_theme_to_storage(theme: Theme) {
    if LocalStorage::raw()
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .is_err()
    {
        warn!("could not persist theme preference");
    }
}

/// Update the data-theme attribute on the root element and persist the choice
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }

    save_theme_to_storage(theme);
}
