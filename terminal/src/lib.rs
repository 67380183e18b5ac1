pub mod app;
pub mod controls;
pub mod render;
