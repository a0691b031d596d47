//! pseudolens
//!
//! Splits pseudo-files annotated with `@level:<label>` markers into their
//! abstraction levels and ordered sections, and serves that over HTTP.
//!
//! The parser core (`parser`, `model`) is pure; `server`, `source`,
//! `config` and `logging` form the impure shell around it.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod server;
pub mod source;
