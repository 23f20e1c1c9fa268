pub mod layout_config;
pub mod rca_config;
pub mod whys_config;

pub use layout_config::LayoutConfig;
pub use rca_config::RcaConfig;
pub use whys_config::{RetentionPolicy, WhysConfig};
