//! Console front end and match driver for the noughts engine.
//!
//! The engine never touches a terminal; everything it needs from the
//! outside world is expressed as the capability traits in [`io`]. The
//! [`terminal`] module implements them over stdin/stdout, and the
//! [`orchestrator`] sequences rounds and matches against whichever
//! implementation it is handed.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod io;
pub mod orchestrator;
pub mod terminal;
