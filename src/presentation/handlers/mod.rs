mod download;
mod health;
mod process;

pub use download::download_handler;
pub use health::health_handler;
pub use process::process_handler;
