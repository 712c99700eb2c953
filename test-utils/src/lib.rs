//! Rolekeeper Test Utils
//!
//! Provides shared testing utilities for the rolekeeper bot. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases, factories for the role
//! catalog entities, and factories for Serenity objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Insert role catalog rows with sensible defaults
//! - **serenity**: Build Serenity structs from JSON the way Discord would send them
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_categories() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_role_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let category = factory::create_category(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
