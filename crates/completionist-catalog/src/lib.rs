//! The collectible hierarchy and its unlock conditions.
//!
//! A [`Collection`] is a tree of [`Section`]s, each holding [`Area`]s, each
//! holding [`Item`]s. The tree is assembled once by [`CollectionBuilder`]
//! and never mutated afterwards. Progress lives elsewhere
//! (`completionist-progress`) and is passed in whenever a count, a
//! percentage, or an unlock condition needs it.
//!
//! # Modules
//!
//! - [`builder`] -- Bottom-up assembly with parent links, id uniqueness
//!   checks, and condition resolution.
//! - [`completion`] -- [`CompletionTrackable`]: totals and percentages for
//!   every container node.
//! - [`condition`] -- [`UnlockCondition`] and the [`EvalContext`] it is
//!   evaluated against.
//! - [`error`] -- Error types for building and querying a collection.
//! - [`hierarchy`] -- The [`Collection`], [`Section`], and [`Area`] nodes.
//! - [`item`] -- The [`Item`] leaf.
//! - [`super_mario_galaxy`] -- Built-in content for Super Mario Galaxy.

pub mod builder;
pub mod completion;
pub mod condition;
pub mod error;
pub mod hierarchy;
pub mod item;
pub mod super_mario_galaxy;

// Re-export primary types at crate root.
pub use builder::{AreaBuilder, CollectionBuilder, SectionBuilder};
pub use completion::CompletionTrackable;
pub use condition::{
    CHALLENGE_MIN_COLLECTED, EvalContext, GRAND_ORDINARY_REQUIRED, GRAND_RARE_REQUIRED,
    ReservedItems, TRIAL_PER_MODE_REQUIRED, UnlockCondition,
};
pub use error::CatalogError;
pub use hierarchy::{Area, Collection, Section};
pub use item::Item;
pub use super_mario_galaxy::super_mario_galaxy;
