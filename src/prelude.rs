pub use crate::base::{
    config::Config,
    error::{ConfigError, CycleError, FetchError, NotifyError},
    types::{Res, Void},
};
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
