pub mod input_handler;
pub mod painter;
pub mod pen;
pub mod render_helper;
pub mod sheet;
pub mod state;
pub mod tools;

pub use painter::ScratchpadApp;
pub use state::{parse_launch_args, LaunchOptions};
