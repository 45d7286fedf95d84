pub mod api_utils;
pub mod catalog_api;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod icons;
pub mod modal;
pub mod prefill;
pub mod slug;
pub mod state;
