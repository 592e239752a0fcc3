//! # Jotmark Architecture
//!
//! Jotmark is a **UI-agnostic note-keeping library**. The interactive shell in
//! `main.rs` is just one client; the library itself never touches the terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Shell (main.rs + args.rs)                                   │
//! │  - Parses arguments, runs the command loop, prints output    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes   │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                        │
//! │  - Selection state machine + draft buffer                    │
//! │  - Returns structured `CmdResult`s, never prints             │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Collection (collection.rs)                                  │
//! │  - Ordered note list, monotonic id generation                │
//! │  - Sole writer of the storage backend                        │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                            │
//! │  - Abstract StorageBackend trait                             │
//! │  - FileStore (production), InMemoryStore (testing)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The synchronization contract
//!
//! The heart of the library is keeping four things consistent: the ordered
//! in-memory collection, the persisted blob, the current selection, and the
//! draft buffer. The rules:
//!
//! - Every collection mutation (create, save, delete) rewrites the whole
//!   persisted blob. Write failures are logged and swallowed; in-memory
//!   state stays authoritative for the rest of the session.
//! - Selection changes unconditionally overwrite the draft with the newly
//!   selected note's persisted content. Unsaved edits to the previous note
//!   are discarded — no autosave, no dirty check. Selecting the already
//!   selected note is a no-op so in-progress edits survive.
//! - Titles are derived from content on save, never authored directly, so
//!   title and content cannot diverge.
//!
//! ## Testing Strategy
//!
//! - **Session/collection** (`session.rs`, `collection.rs`): unit tests over
//!   `InMemoryStore` — this is where the lion's share of testing lives.
//! - **Storage** (`store/fs.rs`): round-trip and fail-soft recovery tests on
//!   temp files.
//! - **Shell**: end-to-end tests in `tests/` driving the binary over a
//!   scripted stdin session.
//!
//! ## Module Overview
//!
//! - [`session`]: Selection & draft controller — entry point for all operations
//! - [`collection`]: The ordered note collection and its persistence discipline
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Note`, `NoteId`) and title derivation
//! - [`render`]: Markdown-to-HTML preview rendering
//! - [`editor`]: External editor integration for the draft buffer
//! - [`error`]: Error types

pub mod collection;
pub mod editor;
pub mod error;
pub mod model;
pub mod render;
pub mod session;
pub mod store;
