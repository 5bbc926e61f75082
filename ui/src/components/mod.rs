pub mod data_card;
pub mod empty_state;
pub mod hello_world;
pub mod layout;
pub mod pico;
pub mod theme_switcher;
