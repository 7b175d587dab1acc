//! Data model of the metro network
//!
//! Contains the station graph and the aggregate model used for routing.

pub mod components;
pub mod metro_model;
pub mod network;

pub use components::{Connection, Station};
pub use metro_model::MetroModel;
pub use network::{MetroGraph, MetroNetwork};
