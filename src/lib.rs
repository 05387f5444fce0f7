//! # Introduction
//!
//! sortlab animates classic sorting algorithms step by step and renders
//! interactive data-structure manipulations (stacks, queues, linked lists and
//! search trees) in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input values → Trace Engine → Steps → Playback → TUI
//! Backing list → Layout Engine → Nodes + Edges → TUI
//! ```
//!
//! 1. [`trace`] — one step-trace generator per algorithm; each run produces a
//!    fully materialized, replayable [`trace::Trace`] of comparisons, swaps
//!    and bookkeeping counters.
//! 2. [`layout`] — derives positioned [`layout::StructureNode`]s and the
//!    edges between them from a flat value list, recomputed in full on every
//!    mutation.
//! 3. [`lab`] — the backing value collection and its mutation rules
//!    (insert/remove/update/clear) per structure kind.
//! 4. [`catalog`] — static per-algorithm metadata: complexity classes,
//!    description and the reference C listing shown in the code pane.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms and structures
//!
//! Sorts: bubble, selection, insertion, merge, quick, heap, shell.
//! Structures: stack, queue, singly/doubly/circular linked list, binary
//! search tree, AVL tree (balanced-shape approximation), B-tree (two-level
//! block view).

pub mod catalog;
pub mod lab;
pub mod layout;
pub mod trace;
pub mod ui;
