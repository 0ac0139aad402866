//! # relay-core
//!
//! Core types and traits for the relay bot: [`Bot`], [`Handler`], message, content and user types,
//! and tracing initialization. Transport-agnostic; used by relay-telegram and handler-chain.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{RelayError, Result};
pub use logger::{init_tracing, open_log_file, DEFAULT_LOG_FILTER};
pub use types::{
    Chat, Content, Delivery, Handler, HandlerResponse, Media, MediaKind, Message, ToCoreMessage,
    ToCoreUser, User,
};
