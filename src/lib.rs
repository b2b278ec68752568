//! # Cart Resource
//!
//! > **Per-customer shopping carts on top of resource-oriented store actors.**
//!
//! Every customer (or anonymous session) owns at most one cart, an ordered list of item
//! lines. Callers get a cart, list and change its lines, and fold a session cart into the
//! customer's cart when the session logs in.
//!
//! ## 🏗️ Core Concepts
//!
//! ### Resources
//! A resource binds a key to an aggregate and exposes its lifecycle: `create`, `value`,
//! `merge` and `destroy`. A cart's lines are reached through a contents view with
//! `contents`, `add` and `delete`. Each capability is its own trait, so a resource only
//! implements what it supports. See the [`resource`] module.
//!
//! ### Item identity
//! Two items are equal when their item ids are equal, whatever their quantity, price or
//! storage id. That is what lets a bare item id find the stored line, and what decides
//! between adding a new line and incrementing an existing one.
//!
//! ### Stores as actors
//! Carts and items each live in a [`StoreActor`](framework::StoreActor): one Tokio task
//! owning an in-memory collection and processing requests one at a time. Every write of a
//! cart replaces the whole document; two requests racing on the same cart are last write
//! wins.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic store actor, its client, and the [`Document`](framework::Document) trait.
//!
//! ### 2. The Data ([`model`], [`cart_actor`], [`item_actor`])
//! [`Cart`](model::Cart) and [`Item`](model::Item), and how each is stored.
//!
//! ### 3. The Interface ([`clients`])
//! [`CartStore`](clients::CartStore) and [`ItemStore`](clients::ItemStore), typed
//! wrappers over the generic client.
//!
//! ### 4. The Core ([`resource`], [`service`])
//! Resources, the found-item lookup, the cart merge, and the operations built from them.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`CartSystem`](lifecycle::CartSystem) starts and wires the stores;
//! [`CartConfig`](config::CartConfig) reads the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod item_actor;
pub mod lifecycle;
pub mod model;
pub mod resource;
pub mod service;
