mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_add, handle_delete, handle_init, handle_list, handle_locate, handle_reset,
    handle_show, handle_title,
};
