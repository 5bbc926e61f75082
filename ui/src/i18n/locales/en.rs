use super::Catalog;

pub const MESSAGES: Catalog = &[
    ("nav.home", "Home"),
    ("nav.dashboard", "Dashboard"),
    ("nav.about", "About"),
    ("nav.toggleMenu", "Toggle menu"),
    ("sidebar.navigation", "Navigation"),
    ("sidebar.quickLinks", "Quick Links"),
    ("footer.rights", "All rights reserved"),
    ("footer.privacy", "Privacy"),
    ("footer.terms", "Terms"),
    ("footer.about", "About"),
    ("footer.navigation", "Footer navigation"),
    ("theme.light", "Light"),
    ("theme.dark", "Dark"),
    ("theme.system", "System"),
    ("languages.en", "English"),
    ("languages.pl", "Polski"),
    ("current.theme", "Current theme:"),
    ("current.language", "Current language:"),
    ("home.title", "Welcome to RAG-TS"),
    ("home.subtitle", "Modern Dioxus application written in Rust"),
    ("home.description", "Responsive layout with mobile-first approach, Dioxus Router, signals and i18n."),
    ("dashboard.title", "Dashboard"),
    ("dashboard.subtitle", "Your data in one place"),
    ("dashboard.stats", "Statistics"),
    ("dashboard.recentActivity", "Recent Activity"),
    ("dashboard.dataCards", "Data Cards"),
    ("dashboard.fetchData", "Fetch data"),
    ("dashboard.saveData", "Save data"),
    ("dashboard.saveInvalid", "Save invalid payload"),
    ("dashboard.fetchCurrencies", "Fetch exchange rates"),
    ("dashboard.reset", "Reset"),
    ("dashboard.loading", "Loading..."),
    ("dashboard.error", "Error"),
    ("dashboard.noData", "No data yet"),
    ("dashboard.noCurrencies", "No exchange rates loaded"),
    ("dashboard.noCurrenciesHint", "Fetch the current NBP table to see the first ten rates."),
    ("dashboard.currency", "Currency"),
    ("dashboard.code", "Code"),
    ("dashboard.mid", "Mid rate"),
    ("about.title", "About"),
    ("about.subtitle", "RAG-TS - Rust + Dioxus"),
    ("about.description", "This application demonstrates responsive layout using modern web development technologies."),
    ("about.features", "Features"),
    ("about.feature1", "Mobile-First responsive design"),
    ("about.feature2", "Dioxus Router for routing"),
    ("about.feature3", "Signals for state management"),
    ("about.feature4", "Built-in catalogs for internationalization"),
    ("about.feature5", "Theme switcher (light/dark/system)"),
    ("about.feature6", "Rust for type safety"),
    ("about.feature7", "Language switcher (Polish/English)"),
    ("privacy.title", "Privacy"),
    ("privacy.body", "Your theme and language choices are stored only on this device."),
    ("terms.title", "Terms"),
    ("terms.body", "This is a demonstration application provided as is."),
    ("notFound.title", "Page not found"),
    ("notFound.back", "Back to home"),
    ("hello.count", "count is"),
];
