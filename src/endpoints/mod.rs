pub mod handlers;
mod map;
