//! Translation discovery and payload assembly.
//!
//! ## Module Structure
//!
//! - `source`: directory listing / file reading seam (disk or memory)
//! - `loader`: `<base>.<code>.json` discovery and data object assembly
//! - `data_object`: the payload variants written into assets

mod data_object;
mod loader;
mod source;

pub use data_object::*;
pub use loader::*;
pub use source::*;
