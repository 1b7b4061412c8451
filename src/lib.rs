//! Credit Risk Benchmark Service Library
//!
//! Interactive front-end for a pre-trained loan-default classifier: borrower
//! attributes come in through an HTML form or the JSON API, get packed into a
//! fixed-order feature vector, and one predict call yields a binary label.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: JSON API request handlers.
//! - `jokes`: The fixed joke list and random selection.
//! - `model`: Model artifact loading and the inference seam.
//! - `models`: Borrower record, field bounds, and response types.
//! - `pages`: Server-rendered HTML views.
//! - `routes`: Router assembly and OpenAPI document.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod jokes;
pub mod model;
pub mod models;
pub mod pages;
pub mod routes;
