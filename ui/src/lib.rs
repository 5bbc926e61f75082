// The client-side Dioxus application logic.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

mod app_state;
mod app_state_mut;
mod app_store;
pub mod compat;
mod components;
pub mod hooks;
mod i18n;
mod screens;
#[cfg(test)]
mod test_support;
mod theme;

use api::config::AppConfig;
use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use app_state_mut::AppStateMut;
use app_store::AppStore;
use components::layout::app_layout::AppLayout;
use hooks::use_system_theme_watcher;
use i18n::I18n;
use screens::about::AboutScreen;
use screens::dashboard::DashboardScreen;
use screens::home::HomeScreen;
use screens::legal::PrivacyScreen;
use screens::legal::TermsScreen;
use screens::not_found::NotFoundScreen;
use theme::ThemeController;

/// Every page of the application, rendered inside [`AppLayout`].
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/", HomeScreen)]
        Home {},
        #[route("/dashboard", DashboardScreen)]
        Dashboard {},
        #[route("/about", AboutScreen)]
        About {},
        #[route("/privacy", PrivacyScreen)]
        Privacy {},
        #[route("/terms", TermsScreen)]
        Terms {},
        #[route("/:..segments", NotFoundScreen)]
        NotFound { segments: Vec<String> },
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: asset!("/assets/css/app.css"),
        }
        AppBody {}
    }
}

/// Loads preferences and provides the app-wide contexts before any route
/// renders.
#[component]
fn AppBody() -> Element {
    // Provide the stable, non-reactive AppState.
    let app_state = use_context_provider(|| AppState::new(AppConfig::from_env()));

    let store = use_hook(compat::preference_store);
    let user_prefs = use_hook(|| {
        let prefs = UserPrefs::load(&*store, &app_state.config.default_locale);
        info!("prefs: {:#?}", prefs);
        prefs
    });

    // Create signals for mutable state at the top level of the component.
    let theme = use_signal(|| {
        ThemeController::load(
            user_prefs.theme(),
            compat::system_theme(),
            store.clone(),
            Rc::new(compat::DocumentRoot),
        )
    });
    let i18n = use_signal(|| {
        I18n::new(
            user_prefs.locale(),
            app_state.config.fallback_locale.clone(),
            store.clone(),
        )
    });
    let app_store = use_signal(AppStore::default);

    // Provide the mutable state by passing the already created signals.
    use_context_provider(|| AppStateMut {
        theme,
        i18n,
        store: app_store,
    });

    use_system_theme_watcher(theme);

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::About {}.to_string(), "/about");
        assert_eq!(Route::Privacy {}.to_string(), "/privacy");
        assert_eq!(Route::Terms {}.to_string(), "/terms");
    }

    #[test]
    fn known_paths_parse() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
        assert_eq!("/dashboard".parse::<Route>().ok(), Some(Route::Dashboard {}));
        assert_eq!("/terms".parse::<Route>().ok(), Some(Route::Terms {}));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            "/no/such/page".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["no".into(), "such".into(), "page".into()]
            })
        );
    }
}
