//! notes-store: Storage layer for the notes API
//!
//! This crate provides:
//! - PostgreSQL storage for notes
//! - Migration management
//! - Type-safe database operations via sqlx
//! - A transport-independent `NoteService` over the raw store
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{NoteService, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//! let service = NoteService::new(store);
//!
//! let note = service.create("buy milk".to_string()).await?;
//! let fetched = service.find_by_id(&note.id.to_string()).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod service;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{NewNote, NoteRow};
pub use service::NoteService;
pub use store::{Store, StoreConfig};

// Re-export notes-core for downstream crates
pub use notes_core;
