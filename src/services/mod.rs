pub mod chat;
pub mod persona;
