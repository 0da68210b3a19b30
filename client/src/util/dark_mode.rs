//! Dark mode preference for the staff and customer views.
//!
//! The preference lives in `localStorage` and is applied as a `data-theme`
//! attribute on `<html>`, which the stylesheet keys its palette on. Without
//! a stored preference the system color scheme wins. SSR paths no-op so the
//! server always renders the light shell.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage;

const STORAGE_KEY: &str = "quenify_dark";

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Stored preference, else the system preference.
pub fn read_preference() -> bool {
    match storage::load_string(STORAGE_KEY) {
        Some(val) => val == "true",
        None => system_prefers_dark(),
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme_name(enabled);
    }
}

fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Flip the theme, apply it and persist it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_string(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
