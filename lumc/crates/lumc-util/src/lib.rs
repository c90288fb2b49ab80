//! lumc-util - Shared infrastructure for the Lumina toolchain
//!
//! The lexer and the command-line front end both speak in terms of the
//! [`Diagnostic`] values defined here. A diagnostic is a line-stamped
//! message with a stable [`DiagnosticCode`]; a [`Handler`] collects them in
//! the order they were detected.
//!
//! ```
//! use lumc_util::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::new("unterminated string literal")
//!     .code(DiagnosticCode::L_UNTERMINATED_STRING)
//!     .line(3)
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
