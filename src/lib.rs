pub mod api;
pub mod config;
pub mod crud;
pub mod widget;
