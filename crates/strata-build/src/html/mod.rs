//! HTML-generation lifecycle surface.
//!
//! The core never generates HTML. It registers against the document
//! generator's extension points and mutates the shared context those points
//! expose: the chunk manifest and script-asset list before injection, the
//! generated script tags afterwards.

mod assets;
mod extensions;
mod tags;

pub use assets::{ChunkAssets, HtmlAssets};
pub use extensions::{HtmlExtension, HtmlExtensions, HtmlStage};
pub use tags::{AttrValue, MODULE_TYPE, NOMODULE_ATTR, ScriptTag};
