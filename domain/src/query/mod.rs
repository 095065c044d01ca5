//! Query configuration value objects.
//!
//! Each kind of user question is configured with one of these types.
//! They are immutable once built and hold no reference to how text
//! actually reaches the user.
//!
//! - [`outcome`] — tagged results of the conversion and validation steps
//! - [`range`] — optional numeric bounds
//! - [`menu`] — insertion-ordered menu options
//! - [`text`] — maximum text length
//! - [`path`] — filesystem path syntax checks

pub mod menu;
pub mod outcome;
pub mod path;
pub mod range;
pub mod text;
