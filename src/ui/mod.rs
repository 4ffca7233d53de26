pub mod components;
pub mod context;
pub mod error;
pub mod json;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod views;
