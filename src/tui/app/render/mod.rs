mod header;
mod status;

pub use header::render_header;
pub use status::{render_status, waiting_label};
