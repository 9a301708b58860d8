pub mod developer;
pub mod dialogs;
pub mod executive;
pub mod manager;
pub mod theme;
pub mod toolbar;
pub mod widgets;
