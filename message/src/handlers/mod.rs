pub mod read;

pub use read::read_handler;
