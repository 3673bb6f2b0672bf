pub mod filter;

pub use self::filter::{load_config, FilterToolConfig, KernelConfig};
