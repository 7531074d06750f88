pub mod view_cache;

pub use view_cache::{ViewCache, ViewKey, ViewPlan};
