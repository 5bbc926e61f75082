use super::Catalog;

// languages.*, current.* and about.feature7 come from the English catalog.
pub const MESSAGES: Catalog = &[
    ("nav.home", "Strona główna"),
    ("nav.dashboard", "Panel"),
    ("nav.about", "O aplikacji"),
    ("nav.toggleMenu", "Przełącz menu"),
    ("sidebar.navigation", "Nawigacja"),
    ("sidebar.quickLinks", "Szybkie linki"),
    ("footer.rights", "Wszystkie prawa zastrzeżone"),
    ("footer.privacy", "Prywatność"),
    ("footer.terms", "Regulamin"),
    ("footer.about", "O nas"),
    ("footer.navigation", "Nawigacja w stopce"),
    ("theme.light", "Jasny"),
    ("theme.dark", "Ciemny"),
    ("theme.system", "Systemowy"),
    ("home.title", "Witaj w RAG-TS"),
    ("home.subtitle", "Nowoczesna aplikacja Dioxus napisana w Rust"),
    ("home.description", "Responsywny layout z mobile-first approach, Dioxus Router, sygnały i i18n."),
    ("dashboard.title", "Panel"),
    ("dashboard.subtitle", "Twoje dane w jednym miejscu"),
    ("dashboard.stats", "Statystyki"),
    ("dashboard.recentActivity", "Ostatnia aktywność"),
    ("dashboard.dataCards", "Karty danych"),
    ("dashboard.fetchData", "Pobierz dane"),
    ("dashboard.saveData", "Zapisz dane"),
    ("dashboard.saveInvalid", "Zapisz błędne dane"),
    ("dashboard.fetchCurrencies", "Pobierz kursy walut"),
    ("dashboard.reset", "Wyczyść"),
    ("dashboard.loading", "Ładowanie..."),
    ("dashboard.error", "Błąd"),
    ("dashboard.noData", "Brak danych"),
    ("dashboard.noCurrencies", "Brak kursów walut"),
    ("dashboard.noCurrenciesHint", "Pobierz aktualną tabelę NBP, aby zobaczyć pierwsze dziesięć kursów."),
    ("dashboard.currency", "Waluta"),
    ("dashboard.code", "Kod"),
    ("dashboard.mid", "Kurs średni"),
    ("about.title", "O aplikacji"),
    ("about.subtitle", "RAG-TS - Rust + Dioxus"),
    ("about.description", "Ta aplikacja demonstruje responsywny layout z wykorzystaniem najnowszych technologii web development."),
    ("about.features", "Funkcje"),
    ("about.feature1", "Mobile-First responsive design"),
    ("about.feature2", "Dioxus Router dla routingu"),
    ("about.feature3", "Sygnały dla zarządzania stanem"),
    ("about.feature4", "Wbudowane katalogi dla internacjonalizacji"),
    ("about.feature5", "Theme switcher (light/dark/system)"),
    ("about.feature6", "Rust dla bezpieczeństwa typów"),
    ("privacy.title", "Prywatność"),
    ("privacy.body", "Wybrany motyw i język są zapisywane wyłącznie na tym urządzeniu."),
    ("terms.title", "Regulamin"),
    ("terms.body", "To jest aplikacja demonstracyjna udostępniana w obecnej postaci."),
    ("notFound.title", "Nie znaleziono strony"),
    ("notFound.back", "Wróć na stronę główną"),
    ("hello.count", "licznik:"),
];
