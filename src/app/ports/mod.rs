pub mod listener;

pub use listener::TableListener;

#[cfg(any(test, feature = "test-support"))]
pub use listener::MockTableListener;
