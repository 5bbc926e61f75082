use std::cell::RefCell;
use std::rc::Rc;

use api::prefs::theme::ActiveTheme;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::app_state_mut::AppStateMut;
use crate::compat::SystemThemeWatcher;
use crate::theme::ThemeController;

/// Callback fed with every color-scheme change.
type OnSystemTheme = Box<dyn FnMut(ActiveTheme)>;

/// The app-wide theme controller.
///
/// Read `active_theme()` / `preference()` through it to subscribe; call
/// `set_theme` / `toggle_theme` through `.write()` to change it.
pub fn use_theme() -> Signal<ThemeController> {
    use_context::<AppStateMut>().theme
}

/// Forwards OS color-scheme changes into `theme` while the calling component
/// is mounted. The listener is removed when the component unmounts.
pub fn use_system_theme_watcher(theme: Signal<ThemeController>) {
    use_theme_listener(theme, |on_change| SystemThemeWatcher::register(on_change));
}

/// Registers a listener built by `register` on mount and drops it on
/// unmount. Dropping the listener is what deregisters it.
fn use_theme_listener<W: 'static>(
    mut theme: Signal<ThemeController>,
    register: impl FnOnce(OnSystemTheme) -> Option<W>,
) {
    let listener = use_hook(|| {
        let on_change: OnSystemTheme = Box::new(move |system| {
            debug!("system color scheme -> {}", system);
            theme.write().observe_system_theme(system);
        });
        Rc::new(RefCell::new(register(on_change)))
    });

    use_drop(move || {
        if listener.borrow_mut().take().is_some() {
            debug!("system color scheme listener removed");
        }
    });
}
