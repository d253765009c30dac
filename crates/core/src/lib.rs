//! Core types for linkgraph
//!
//! This crate defines the vocabulary shared by every other crate:
//! - Identities: [`AccountId`] and [`GraphId`]
//! - The error taxonomy: [`GraphError`] and [`StoreError`]
//! - Change notifications: [`GraphEvent`] and the [`EventSink`] seam
//! - Structural configuration: [`GraphOptions`] and [`BeneficiaryOptions`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod event;
pub mod types;

pub use config::{BeneficiaryOptions, GraphOptions};
pub use error::{GraphError, GraphResult, StoreError};
pub use event::{EventLog, EventSink, GraphEvent, NullSink, TracingSink};
pub use types::{AccountId, GraphId, ParseAccountError, Props};
