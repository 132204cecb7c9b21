//! Catalog
//!
//! A greeting helper and a category lookup port with its adapters.
//! Uses hexagonal (ports & adapters) layout: the domain owns the
//! `CategoryRepository` trait, adapters and test doubles implement it.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod helper;
