//! Callout vocabulary and registry
//!
//! Each callout type (note, warning, theorem, ...) maps to a title, an
//! inline icon and a pair of Tailwind class sets. The registry resolves all
//! of them up front and synthesizes the `class` attribute for callout
//! containers.

mod kind;
mod registry;

pub use kind::{CalloutEntry, CalloutKind, UnknownCalloutKind};
pub use registry::{CalloutDefinition, CalloutRegistry, ContainerAttributes, STRUCTURAL_CLASSES};
