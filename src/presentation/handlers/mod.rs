mod envelope;
mod health;
mod process;
mod upload;

pub use envelope::{error_response, ErrorBody};
pub use health::health_handler;
pub use process::process_handler;
pub use upload::upload_handler;
