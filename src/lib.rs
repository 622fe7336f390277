//! Server-rendered multilingual website for a cardiology practice.
//!
//! Three locales (`de` default and unprefixed, `en`, `fa` right-to-left)
//! drive locale-aware routing and per-locale message dictionaries; pages
//! are composed from presentational sections that pull every string from
//! the active dictionary.

pub mod config;
pub mod i18n;
pub mod middleware;
pub mod pages;
pub mod render;
pub mod server;
