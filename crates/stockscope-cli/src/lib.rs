//! # Stockscope CLI
//!
//! Slash-command front end over [`stockscope_core`].
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cli`] | clap argument structs |
//! | [`router`] | Command dispatch and [`router::Report`] |
//! | [`commands`] | `/view`, `/boot`, `/gov` handlers |
//! | [`output`] | Text and JSON presenter, home screen |
//! | [`logging`] | stderr tracing setup |

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;

pub use router::{dispatch, CommandInvocation, Report};
