// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Media query whose `matches` tells whether the OS prefers a light scheme.
const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::rc::Rc;
    use std::time::Duration;

    use api::prefs::store::PreferenceStore;
    use api::prefs::theme::ActiveTheme;
    use api::prefs::theme::THEME_ATTRIBUTE;
    use dioxus_logger::tracing::warn;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{self, Element, MediaQueryList, Storage};

    use super::PREFERS_LIGHT_QUERY;
    use crate::theme::ThemeRoot;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn root_element() -> Option<Element> {
        web_sys::window()?.document()?.document_element()
    }

    fn light_scheme_query() -> Option<MediaQueryList> {
        web_sys::window()?.match_media(PREFERS_LIGHT_QUERY).ok()?
    }

    /// `window.localStorage`.
    pub struct BrowserStorage;

    impl PreferenceStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            local_storage()?.get_item(key).ok()?
        }

        fn set(&self, key: &str, value: &str) {
            match local_storage() {
                Some(storage) => {
                    if let Err(e) = storage.set_item(key, value) {
                        warn!("localStorage.setItem({}) failed: {:?}", key, e);
                    }
                }
                None => warn!("localStorage unavailable, {} not persisted", key),
            }
        }
    }

    pub fn preference_store() -> Rc<dyn PreferenceStore> {
        Rc::new(BrowserStorage)
    }

    /// The `<html>` element of the current document.
    pub struct DocumentRoot;

    impl ThemeRoot for DocumentRoot {
        fn apply_theme_attribute(&self, value: Option<&str>) {
            let Some(root) = root_element() else {
                return;
            };
            let result = match value {
                Some(v) => root.set_attribute(THEME_ATTRIBUTE, v),
                None => root.remove_attribute(THEME_ATTRIBUTE),
            };
            if let Err(e) = result {
                warn!("failed to update {}: {:?}", THEME_ATTRIBUTE, e);
            }
        }
    }

    /// Current OS color scheme; dark when media queries are unsupported.
    pub fn system_theme() -> ActiveTheme {
        let prefers_light = light_scheme_query().is_some_and(|q| q.matches());
        ActiveTheme::from_prefers_light(prefers_light)
    }

    /// Keeps a `change` listener registered on the color-scheme media query
    /// for as long as it is alive.
    pub struct SystemThemeWatcher {
        query: MediaQueryList,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl SystemThemeWatcher {
        pub fn register(mut on_change: impl FnMut(ActiveTheme) + 'static) -> Option<Self> {
            let query = light_scheme_query()?;
            let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                on_change(system_theme());
            });
            query
                .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { query, callback })
        }
    }

    impl Drop for SystemThemeWatcher {
        fn drop(&mut self) {
            let _ = self
                .query
                .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::time::Duration;

    use api::prefs::store::MemoryStore;
    use api::prefs::store::PreferenceStore;
    use api::prefs::theme::ActiveTheme;
    use api::prefs::theme::THEME_ATTRIBUTE;
    use dioxus::core::Task;
    use dioxus::prelude::*;
    use dioxus_logger::tracing::warn;

    use super::PREFERS_LIGHT_QUERY;
    use crate::theme::ThemeRoot;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Preferences kept as one JSON object in a file, the desktop analogue
    /// of `localStorage`.
    pub struct FileStore {
        path: PathBuf,
        entries: RefCell<BTreeMap<String, String>>,
    }

    impl FileStore {
        /// `<config dir>/rag-ts/preferences.json`
        pub fn default_location() -> Option<PathBuf> {
            dirs::config_dir().map(|dir| dir.join("rag-ts").join("preferences.json"))
        }

        /// Opens the store at `path`. A missing file is an empty store; an
        /// unreadable or corrupt one is logged and treated as empty.
        pub fn open(path: PathBuf) -> Self {
            let entries = match std::fs::read_to_string(&path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                    warn!("ignoring corrupt preference file {}: {}", path.display(), e);
                    BTreeMap::new()
                }),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
                Err(e) => {
                    warn!("cannot read preference file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            };
            Self {
                path,
                entries: RefCell::new(entries),
            }
        }

        fn flush(&self) -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(&*self.entries.borrow())?;
            std::fs::write(&self.path, json)
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            if let Err(e) = self.flush() {
                warn!("failed to persist {} to {}: {}", key, self.path.display(), e);
            }
        }
    }

    pub fn preference_store() -> Rc<dyn PreferenceStore> {
        match FileStore::default_location() {
            Some(path) => Rc::new(FileStore::open(path)),
            None => {
                warn!("no config directory, preferences will not survive a restart");
                Rc::new(MemoryStore::new())
            }
        }
    }

    /// The `<html>` element of the webview, driven by script evaluation.
    pub struct DocumentRoot;

    impl ThemeRoot for DocumentRoot {
        fn apply_theme_attribute(&self, value: Option<&str>) {
            let script = match value.map(serde_json::to_string) {
                Some(Ok(v)) => format!(
                    "document.documentElement.setAttribute('{}', {});",
                    THEME_ATTRIBUTE, v
                ),
                _ => format!(
                    "document.documentElement.removeAttribute('{}');",
                    THEME_ATTRIBUTE
                ),
            };
            let _ = document::eval(&script);
        }
    }

    /// The webview is only asked asynchronously, so the initial value is the
    /// default until [`SystemThemeWatcher`] reports the real one.
    pub fn system_theme() -> ActiveTheme {
        ActiveTheme::default()
    }

    /// Forwards the webview's color-scheme changes (and its current value,
    /// once) for as long as it is alive.
    pub struct SystemThemeWatcher {
        task: Task,
    }

    impl SystemThemeWatcher {
        pub fn register(mut on_change: impl FnMut(ActiveTheme) + 'static) -> Option<Self> {
            let js_code = format!(
                r#"
                const query = window.matchMedia("{PREFERS_LIGHT_QUERY}");
                dioxus.send(query.matches);
                query.addEventListener("change", (event) => dioxus.send(event.matches));
                await new Promise(() => {{}});
                "#
            );
            let task = spawn(async move {
                let mut eval = document::eval(&js_code);
                while let Ok(prefers_light) = eval.recv::<bool>().await {
                    on_change(ActiveTheme::from_prefers_light(prefers_light));
                }
            });
            Some(Self { task })
        }
    }

    impl Drop for SystemThemeWatcher {
        fn drop(&mut self) {
            self.task.cancel();
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn file_store_survives_reopen() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested").join("preferences.json");

            let store = FileStore::open(path.clone());
            assert_eq!(store.get("theme"), None);
            store.set("theme", "dark");
            store.set("locale", "en");
            store.set("theme", "light");

            let reopened = FileStore::open(path);
            assert_eq!(reopened.get("theme").as_deref(), Some("light"));
            assert_eq!(reopened.get("locale").as_deref(), Some("en"));
        }

        #[test]
        fn corrupt_file_reads_as_empty() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("preferences.json");
            std::fs::write(&path, "{ not json").unwrap();

            let store = FileStore::open(path.clone());
            assert_eq!(store.get("theme"), None);

            // the next write replaces the broken content
            store.set("theme", "system");
            assert_eq!(FileStore::open(path).get("theme").as_deref(), Some("system"));
        }
    }
}
