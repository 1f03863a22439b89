pub mod blocking;
pub mod clipboard;
