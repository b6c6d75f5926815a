pub mod config;
pub mod logging;

pub mod batch;
pub mod dictionary;
pub mod discovery;
pub mod error;
pub mod http;
pub mod resolver;
pub mod retriever;
pub mod url_model;
