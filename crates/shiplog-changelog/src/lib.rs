//! Shiplog Changelog - commit parsing and changelog assembly
//!
//! This crate splits raw delimited `git log` output into commit records,
//! extracts ticket references via dialect recognizers, and assembles the
//! formatted lines into the final document.

mod assembler;
mod changelog;
mod parser;
pub mod tickets;

pub use assembler::{ChangelogAssembler, SortMode, Sorter};
pub use changelog::Changelog;
pub use parser::CommitParser;
pub use tickets::{TicketRecognizer, TicketRef};

/// Delimiter emitted before each commit record in the raw log
pub const COMMIT_DELIMITER: &str = "__COMMIT__";

/// Token reserved in each formatted line for ticket-link substitution
pub const TICKET_PLACEHOLDER: &str = "__TICKETREF__";
