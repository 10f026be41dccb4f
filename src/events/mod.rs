pub mod controls;
pub mod pointer;

pub use controls::{wire_controls, ControlWiring};
pub use pointer::{wire_pointer_handlers, PointerWiring};
