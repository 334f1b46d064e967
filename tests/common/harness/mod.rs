//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic contact seeding,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod contact;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::ContactsCommand;
#[allow(unused_imports)]
pub use contact::TestContact;
#[allow(unused_imports)]
pub use env::TestEnv;
