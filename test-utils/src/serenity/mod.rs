//! Test factories for creating Serenity API objects.
//!
//! These factories build valid Serenity structs by deserializing JSON shaped like
//! Discord's API responses, so conversion and permission code can be tested
//! without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! let role = create_test_role(111111111, "Staff", 0x00FF00, 4);
//! let member = create_test_member(222222222, 333333333, &[111111111]);
//! ```

pub mod member;
pub mod role;

pub use member::create_test_member;
pub use role::create_test_role;
