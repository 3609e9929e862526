//! Chat command layer for the Star Wars narrative dice roller.
//!
//! Transport-agnostic: a front-end hands each incoming message to
//! [`Bot::handle`] together with the sender and that sender's
//! [`Session`], and delivers the returned [`Reply`]. Provides the
//! subscription whitelist, English/Spanish message catalogs, reply
//! formatting, and picture-mode image selection.

pub mod assets;
pub mod bot;
pub mod command;
pub mod config;
pub mod error;
pub mod locale;
pub mod reply;
pub mod session;
pub mod whitelist;

pub use bot::{Bot, User};
pub use command::Command;
pub use config::BotConfig;
pub use error::{BotError, BotResult};
pub use locale::{Catalog, Language};
pub use reply::Reply;
pub use session::{Mode, Session, SessionStore};
pub use whitelist::Whitelist;
