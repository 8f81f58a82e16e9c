mod shell;
pub use shell::ShellMode;
