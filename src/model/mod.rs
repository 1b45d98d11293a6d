//! Configuration data model.
//!
//! This module provides types for:
//! - Comments attached to elements ([`Comment`])
//! - The shared element contract ([`Element`])
//! - Named raw values with typed access ([`Setting`])
//! - Ordered, name-unique setting collections ([`Section`])
//! - The root aggregate ([`Configuration`])
//! - Declarative section-to-struct binding ([`FieldMap`])
//!
//! Ownership is strictly hierarchical: a configuration owns its sections,
//! a section owns its settings. Names are unique per collection under
//! case-insensitive comparison.

mod comment;
mod configuration;
pub(crate) mod element;
mod mapping;
mod section;
mod setting;

#[cfg(test)]
mod mapping_tests;

pub use comment::Comment;
pub use configuration::Configuration;
pub use element::Element;
pub use mapping::FieldMap;
pub use section::Section;
pub use setting::Setting;
