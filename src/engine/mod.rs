//! Validation of freehand tracing against a reference path.

mod config;
pub use config::*;

mod reference_path;
pub use reference_path::*;

mod stroke;
pub use stroke::*;

mod validator;
pub use validator::*;

mod session;
pub use session::*;
