//! Watchlist client.
//!
//! [`api::WatchlistApi`] talks to the records endpoints. The view is an
//! immutable [`view::ViewState`] driven by the pure [`view::reduce`]
//! function; [`session::WatchlistSession`] glues the two together and
//! refetches the full list after every mutation.

pub mod api;
pub mod error;
pub mod filter;
pub mod form;
pub mod render;
pub mod session;
pub mod view;
