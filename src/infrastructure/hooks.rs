use crate::domain::RangeChange;
use anyhow::Result;

/// Trait for plugins that respond to finalized range selections
pub trait ChangeHook: Send + Sync {
    /// Called once for every range the picker finalizes
    fn on_range_changed(&self, change: &RangeChange) -> Result<()>;

    /// Human-readable name for this hook
    fn name(&self) -> &str;

    /// Whether this hook should be enabled by default
    fn enabled_by_default(&self) -> bool {
        true
    }
}

/// Adapts a closure into a [`ChangeHook`]
pub struct CallbackHook<F> {
    name: String,
    callback: F,
}

impl<F> CallbackHook<F>
where
    F: Fn(&RangeChange) -> Result<()> + Send + Sync,
{
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<F> ChangeHook for CallbackHook<F>
where
    F: Fn(&RangeChange) -> Result<()> + Send + Sync,
{
    fn on_range_changed(&self, change: &RangeChange) -> Result<()> {
        (self.callback)(change)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Registry for managing change hooks
pub struct HookRegistry {
    hooks: Vec<Box<dyn ChangeHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a new change hook
    pub fn register<H>(&mut self, hook: H)
    where
        H: ChangeHook + 'static,
    {
        log::debug!("Registering change hook '{}'", hook.name());
        self.hooks.push(Box::new(hook));
    }

    /// Deliver a change to every registered hook, in registration order
    pub fn execute_change_hooks(&self, change: &RangeChange) {
        for hook in &self.hooks {
            if let Err(e) = hook.on_range_changed(change) {
                // Continue with other hooks even if one fails
                log::warn!("Hook '{}' failed: {:#}", hook.name(), e);
            }
        }
    }

    /// List all registered hooks
    pub fn list_hooks(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
