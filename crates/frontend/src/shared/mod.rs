pub mod components;
pub mod config;
pub mod icons;
pub mod interactions;
pub mod toast;
