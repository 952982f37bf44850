pub mod init;
pub mod list;
pub mod profile;
pub mod render;
pub mod resize;
pub mod shell;
pub mod watch;
