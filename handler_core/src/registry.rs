use once_cell::sync::OnceCell;

use liblogger::log_info;

use crate::adapter::Adapter;
use crate::config::AdapterConfig;
use crate::error::{HandlerError, Result};
use crate::handler::Handler;

/// Holds the one adapter a handler library serves.
///
/// Written once during load, read lock-free by every call afterwards.
/// Replacing a registered handler is not supported: the exported entry point
/// may be running on other threads.
pub struct HandlerRegistry {
    slot: OnceCell<Adapter>,
}

impl HandlerRegistry {
    pub const fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    pub fn register_adapter(&self, adapter: Adapter) -> Result<()> {
        self.slot
            .set(adapter)
            .map_err(|_| HandlerError::AlreadyRegistered)
    }

    pub fn current(&self) -> Result<&Adapter> {
        self.slot.get().ok_or(HandlerError::Unconfigured)
    }

    pub fn is_registered(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: HandlerRegistry = HandlerRegistry::new();

/// Register the process-wide handler, configured from
/// `handler_config.toml` when present.
pub fn register<H: Handler + 'static>(handler: H) -> Result<()> {
    let config = AdapterConfig::load()?;
    register_adapter(Adapter::with_config(handler, config))
}

/// Register a fully built adapter as the process-wide handler.
pub fn register_adapter(adapter: Adapter) -> Result<()> {
    let policy = adapter.config().on_panic;
    REGISTRY.register_adapter(adapter)?;
    log_info!("handler registered", Some(format!("on_panic={:?}", policy)));
    Ok(())
}

/// The registered adapter, or [`HandlerError::Unconfigured`].
pub fn current() -> Result<&'static Adapter> {
    REGISTRY.current()
}

pub fn is_registered() -> bool {
    REGISTRY.is_registered()
}
