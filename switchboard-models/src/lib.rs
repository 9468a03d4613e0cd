//! Provider and model selection for switchboard.
//!
//! This crate provides:
//! - A validated provider [`Catalog`]
//! - Resolution of the live provider/model from default, persona and session
//! - A string token codec for carrying a model choice through UI state
//!
//! # Precedence
//!
//! ```text
//! ┌──────────────────────────┐
//! │    SessionSelection      │  highest
//! ├──────────────────────────┤
//! │    PersonaOverride       │
//! ├──────────────────────────┤
//! │  Catalog default model   │  lowest
//! └──────────────────────────┘
//! ```
//!
//! Everything is a pure function over its arguments.

mod catalog;
mod display;
mod error;
mod resolve;
mod types;

pub mod token;

pub use catalog::Catalog;
pub use display::display_name_for_model;
pub use error::{Error, Result};
pub use resolve::{
    find_model_configuration, find_provider_for_model, list_distinct_model_options,
    model_supports_image_input, resolve_effective, resolve_persona_override_descriptor,
};
pub use token::{DecodedToken, ModelToken};
pub use types::{
    EffectiveModel, ModelEntry, ModelOption, OverrideDescriptor, PersonaOverride, ProviderEntry,
    ProviderEntryBuilder, SessionSelection,
};
