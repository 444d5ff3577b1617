// src/specs/mod.rs
//! # Extraction “specs” module
//!
//! This module hosts the **page-specific extraction specifications** for the
//! portal. Each spec covers one document and encodes *where the fields live in
//! the markup* and *which patterns pull them out*.
//!
//! ## What lives here
//! - **Pattern extraction** over raw page text: class headers, grade cells,
//!   assignment blocks, attendance rows and class-list blocks, report-card links.
//! - **Progressive consumption**: every pattern is applied with `captures_iter`,
//!   so matches never overlap and come back in document order.
//! - **Light cleanup** of captured text (`core::sanitize::clean_text`).
//!
//! ## What does **not** live here
//! - **Nesting.** Specs return flat `tokens::*` tuples. Which class a grade
//!   belongs to, which event a class list belongs to, and which column a
//!   report-card value sits in is decided in `reconstruct`.
//! - **Fetching.** Input is text the caller already has.
//!
//! ## Typical call chain
//! ```text
//! cli / caller → scrape::collect_* → specs::<page>::*  (flat tuples)
//!                                  ↘ reconstruct::*     (typed records)
//! ```
//!
//! ## Conventions
//! - Patterns compile once (`LazyLock<Regex>`); a pattern that fails to compile
//!   is a programming error, not an input error.
//! - Markup embedded in JSON keeps its escapes (`<\/a>`, `'`); patterns
//!   match the escaped form rather than unescaping whole documents.
//! - A document with no matches yields empty vectors, never an error.
//!
//! ## Testing notes
//! - Every spec is tested offline against small inline fixtures shaped like the
//!   portal's markup.
//!
//! In short: **`specs` knows how to read the pages.** `reconstruct` knows what
//! the pieces mean.
pub mod attendance;
pub mod gradebook;
pub mod report_card;
