//! Category entity feature.
//!
//! A category is a named, describable classification record that can be
//! switched on and off. It validates itself on construction and on every
//! name/description change; persistence and API exposure are left to callers.
//!
//! ## Operations
//!
//! | Operation | Fallible | Description |
//! |-----------|----------|-------------|
//! | `Category::new` / `Category::builder` | Yes | Create a validated category |
//! | `update_name_and_description` | Yes | Replace both fields, unchanged on error |
//! | `activate` | No | Set `is_active` to true |
//! | `deactivate` | No | Set `is_active` to false |

pub mod models;

pub use models::{Category, CategoryBuilder};
