//! Picker abstraction layer
//!
//! This module provides a backend-agnostic interface for interactive
//! selection. Business logic talks to a [`Picker`] and the
//! [`PickerSession`] it opens; the production backend drives an external
//! `fzf` process and tests use an in-process mock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      InteractiveFinder                  │
//! │   (encode rows, reconcile selection)    │
//! └────────────────┬────────────────────────┘
//!                  │ open / feed / selection
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      Picker / PickerSession traits      │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ FzfPicker     │  │ MockPicker        │
//! │ (child proc.) │  │ (tests only)      │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! # Line protocol
//!
//! Each [`Row`] travels as one line whose columns are separated by
//! [`FIELD_DELIMITER`]. The picker prints the accepted lines back, in the
//! order the user selected them.
//!
//! ## Implementing a Custom Picker
//!
//! ```no_run
//! use notepick::ui::{Picker, PickerConfig, PickerSession, Result, Row, Selection};
//!
//! struct FirstRow;
//! struct FirstRowSession(Vec<Row>);
//!
//! impl Picker for FirstRow {
//!     type Session = FirstRowSession;
//!
//!     fn open(&self, _config: &PickerConfig) -> Result<FirstRowSession> {
//!         Ok(FirstRowSession(Vec::new()))
//!     }
//! }
//!
//! impl PickerSession for FirstRowSession {
//!     fn feed(&mut self, row: &Row) -> Result<()> {
//!         self.0.push(row.clone());
//!         Ok(())
//!     }
//!
//!     fn selection(self) -> Result<Selection> {
//!         Ok(self.0.into_iter().take(1).collect())
//!     }
//! }
//! ```

mod error;
mod traits;
mod types;

pub mod fzf_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use fzf_adapter::{FzfPicker, FzfSession};
pub use traits::{Picker, PickerConfig, PickerSession};
pub use types::{Binding, FIELD_DELIMITER, ID_COLUMN, Row, Selection};
