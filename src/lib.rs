pub use tablekit_app as app;
pub use tablekit_domain as domain;
pub use tablekit_infra as infra;

pub mod error;
pub mod logging;
pub mod render;
