//! Centreboard UI Library
//!
//! This crate provides the collection centre block UI - an embeddable
//! content block with an authoring phase (fetch centres, pick one,
//! embed its detail record) and a network-free display phase.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`blocks`]: Block type registration and configuration persistence
//! - [`client`]: Directory API client abstraction
//! - [`components`]: The block's authoring and display components

pub mod app;
pub mod blocks;
pub mod client;
pub mod components;

pub use app::App;
