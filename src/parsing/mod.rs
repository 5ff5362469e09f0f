//! Building blocks of the export parser.
//!
//! Parsing is split into stages that can be exercised on their own:
//!
//! - [`normalize`] - strip directional marks, fold exotic spaces
//! - [`header`] - recognise `<date>, <time> - <rest>` lines and split the sender
//! - [`timestamp`] - settle the date order for the export, build timestamps
//! - [`assembler`] - join continuation lines onto the open message
//!
//! [`LogParser`](crate::parser::LogParser) wires them together.

pub mod assembler;
pub mod header;
pub mod normalize;
pub mod timestamp;

pub use assembler::{AssemblerState, MessageAssembler};
pub use header::{HeaderContent, HeaderLine, Meridiem, RawStamp, match_header, split_sender};
pub use normalize::{is_directional_mark, normalize_line};
pub use timestamp::{FieldOrder, build_timestamp, resolve_order};
