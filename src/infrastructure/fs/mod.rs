//! File System Implementations

mod home;
mod local;

pub use home::{config_dir, cronbook_home_dir, CRONBOOK_TEST_HOME_VAR};
pub use local::{expand_home, LocalFs};
