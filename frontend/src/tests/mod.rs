//! Unit tests for the dashboard.
//!
//! - `table_test` - column partitioning, cell derivation, body state
//! - `date_filter_test` - inclusive day ranges and timestamp parsing
//! - `gauge_test` - arc sweep and ring geometry
//! - `session_test` - session store, sign-in and sign-out
//! - `routes_test` - path mapping and the auth guard
//! - `config_test` - defaults and build-time overrides
//! - `portfolio_test` - seed data, position and preference updates, formatting
//!
//! ```bash
//! cargo test -p tradepro_frontend
//! ```

#[cfg(test)]
pub mod table_test;


#[cfg(test)]
pub mod gauge_test;

#[cfg(test)]
pub mod session_test;

#[cfg(test)]
pub mod routes_test;

#[cfg(test)]
pub mod config_test;

#[cfg(test)]
pub mod portfolio_test;
