pub mod components;
pub mod shell;
pub mod theme;
