//! Rewards API Server
//!
//! Provides the REST API over the rewards ledger.
//!
//! ## Endpoints
//!
//! ### Points
//! - POST /add - Add points for a payer (negative points record a debit)
//! - POST /spend - Spend points, oldest contributions first
//! - GET /balance - Per-payer point totals
//!
//! ### Health
//! - GET /health - Service health

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use routes::*;
pub use server::*;
pub use state::*;
