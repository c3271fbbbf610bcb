//! Upstream transport abstraction and implementation.
//!
//! This module contains:
//! - The `FootballTransport` trait the fetch layer depends on
//! - `FootballDataClient`, the reqwest implementation for football-data.org

mod traits;

pub mod football_data;

// Re-exports
pub use football_data::FootballDataClient;
pub use traits::FootballTransport;
