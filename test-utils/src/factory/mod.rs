//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating role catalog entities with sensible
//! defaults, reducing boilerplate in tests. Each entity has a `Factory` builder for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let category = factory::create_category(&db).await?;
//! let role = factory::create_role(&db, &category.id).await?;
//!
//! let (category, roles) = factory::helpers::create_category_with_roles(&db, 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let category = factory::role_category::RoleCategoryFactory::new(&db)
//!     .name("Games")
//!     .order(2)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod role;
pub mod role_category;
pub mod self_role_message;

pub use role::{create_role, create_self_role};
pub use role_category::create_category;
pub use self_role_message::create_self_role_message;
