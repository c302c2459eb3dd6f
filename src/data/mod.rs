pub mod binding;
pub mod loader;
pub mod registry;
pub mod source;
pub mod stack;
pub mod trace_look;
