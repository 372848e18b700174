//! # portal-chrome
//!
//! Page enhancements for the job portal's server-rendered pages, compiled to
//! WebAssembly and booted from a `<script type="module">` tag.
//!
//! - A dark mode toggle whose state persists in `localStorage`.
//! - Bootstrap tooltips on every `[data-bs-toggle="tooltip"]` element.
//! - Confirmation prompts gating the approve/reject suggestion forms.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`chrome`] | Boot sequence and the [`chrome::PageHost`] lookup seam |
//! | [`theme`] | Dark mode controller |
//! | [`preference`] | Persisted boolean preference |
//! | [`tooltip`] | One-time tooltip initialization |
//! | [`guard`] | Form confirmation gates |
//! | [`dom`] | Element capability traits |
//! | [`config`] | Page contract and JSON overrides |
//! | `browser` | `web_sys` bindings and wasm entry points (`hydrate` only) |
//!
//! Everything outside `browser` runs natively, which is how it is tested.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod chrome;
pub mod config;
pub mod dom;
pub mod error;
pub mod guard;
pub mod preference;
pub mod theme;
pub mod tooltip;

#[cfg(test)]
mod testing;

pub use error::{ChromeError, Result};
