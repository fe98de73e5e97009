//! Core types for the dossie document-management SDK.
//!
//! This crate is deliberately free of HTTP dependencies. It defines the
//! schema-less resource projection mechanism, the [`Person`](person::Person)
//! and [`Document`](document::Document) resources, and the
//! [`Transport`](transport::Transport) contract a concrete backend
//! implements (see `dossie-http`).

pub mod document;
pub mod error;
pub mod person;
pub mod resource;
pub mod transport;

pub use error::{Error, Result};
