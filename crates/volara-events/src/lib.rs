#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Sticky notification bus for the Volara shell.
//!
//! The bus provides typed events, sequential identifiers, and sticky
//! retention: the latest envelope of each event kind is kept so that
//! subscribers attaching after a publication still observe the last-sent
//! value. Internally it uses `tokio::broadcast`; publishing never blocks or
//! fails the caller.
//!
//! Layout: `payloads.rs` (typed events and envelopes), `routing.rs`
//! (`EventBus` + `EventStream` sticky delivery).

pub mod payloads;
pub mod routing;

pub use payloads::{Event, EventEnvelope, EventId};
pub use routing::{EventBus, EventStream};
