pub mod call;
pub mod html;
pub mod init;
pub mod log;
pub mod print;
pub mod show;
pub mod touch;
pub mod tui;
