//! Declarative construction of DOM nodes. Nodes are described without access to the
//! [`web_sys::Document`], and only materialised once they are mounted by the shell.

mod event;
mod location;
mod node;

pub use event::EventType;
pub use location::Location;
pub use node::*;
