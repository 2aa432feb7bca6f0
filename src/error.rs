use std::net::SocketAddr;

use leptos::config::errors::LeptosConfigError;
use thiserror::Error;

/// Failures that stop the server from coming up or keep it from serving.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't load leptos configuration: {0}")]
    Config(#[from] LeptosConfigError),
    #[error("Couldn't bind to {addr}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);
