//! # Order Placer
//!
//! Places orders against products and keeps a per-product buy-count signal, built
//! as a small actor system on tokio.
//!
//! ## Ingredients
//!
//! - **Domain types** - Plain records with no actor concerns → [`domain::Product`], [`domain::Order`], [`domain::PayStatus`]
//! - **Stores** - One generic actor per record type, with lifecycle hooks and custom actions → [`actor_framework::ResourceActor`]
//! - **Cache counter** - A hand-written service keeping fast per-product counters → [`cache_actor::CacheCounterService`]
//! - **Clients** - Thin, traced handles over the actor channels → [`clients::ProductClient`], [`clients::OrderClient`], [`clients::CacheClient`]
//! - **Order placer** - The business transaction, in two consistency modes → [`placer::OrderPlacer`], [`placer::PlaceMode`]
//! - **System coordinator** - Startup, wiring and graceful shutdown → [`app_system::OrderSystem`]
//!
//! ## Consistency modes
//!
//! | Mode | Order of side effects |
//! |---|---|
//! | `Consistent` | read product, durable buy count, cache counter, order write |
//! | `Deferred` | read product, order write, cache counter in the background |
//!
//! In both modes a missing product fails the call before anything is written.
//!
//! ## Example Usage
//!
//! ```no_run
//! use order_placer::app_system::OrderSystem;
//! use order_placer::domain::ProductCreate;
//! use order_placer::placer::PlaceMode;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = OrderSystem::new();
//!
//! let product = system.product_client.create_product(ProductCreate::new("Lamp", 1000, "x.png")).await?;
//! let order = system.placer.place_order(product.id, PlaceMode::Deferred).await?;
//! assert_eq!(order.order_price, 1000);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod cache_actor;
pub mod clients;
pub mod domain;
pub mod messages;
pub mod notification;
pub mod order_actor;
pub mod placer;
pub mod product_actor;

#[cfg(test)]
mod mock_framework;
