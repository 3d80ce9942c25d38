/// Platform - Dependency injection container for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Host ports: `Rc<dyn Trait>`, the extension runs on a single event loop
use crate::domain::messaging::config::HostConfig;
use crate::domain::messaging::error::MessagingError;
use crate::ports::{
    ActionPort, LocalDeliveryPort, LoggerPort, PrefsPort, RuntimePort, SpawnerPort,
    StyleStorePort, Task, TabsPort, WindowsPort,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    tabs: Rc<dyn TabsPort>,
    windows: Rc<dyn WindowsPort>,
    runtime: Rc<dyn RuntimePort>,
    action: Rc<dyn ActionPort>,
    styles: Rc<dyn StyleStorePort>,
    prefs: Rc<dyn PrefsPort>,
    spawner: Rc<dyn SpawnerPort>,
    local_delivery: Option<Rc<dyn LocalDeliveryPort>>,
    config: Rc<HostConfig>,
}

impl Platform {
    pub fn builder() -> PlatformBuilder {
        PlatformBuilder::default()
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn tabs(&self) -> &dyn TabsPort {
        self.tabs.as_ref()
    }

    #[inline]
    pub fn windows(&self) -> &dyn WindowsPort {
        self.windows.as_ref()
    }

    #[inline]
    pub fn runtime(&self) -> &dyn RuntimePort {
        self.runtime.as_ref()
    }

    #[inline]
    pub fn action(&self) -> &dyn ActionPort {
        self.action.as_ref()
    }

    #[inline]
    pub fn styles(&self) -> &dyn StyleStorePort {
        self.styles.as_ref()
    }

    #[inline]
    pub fn prefs(&self) -> &dyn PrefsPort {
        self.prefs.as_ref()
    }

    #[inline]
    pub fn local_delivery(&self) -> Option<&dyn LocalDeliveryPort> {
        self.local_delivery.as_deref()
    }

    #[inline]
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn spawn(&self, task: Task) {
        self.spawner.spawn(task);
    }
}

#[derive(Default)]
pub struct PlatformBuilder {
    logger: Option<&'static dyn LoggerPort>,
    tabs: Option<Rc<dyn TabsPort>>,
    windows: Option<Rc<dyn WindowsPort>>,
    runtime: Option<Rc<dyn RuntimePort>>,
    action: Option<Rc<dyn ActionPort>>,
    styles: Option<Rc<dyn StyleStorePort>>,
    prefs: Option<Rc<dyn PrefsPort>>,
    spawner: Option<Rc<dyn SpawnerPort>>,
    local_delivery: Option<Rc<dyn LocalDeliveryPort>>,
}

impl PlatformBuilder {
    pub fn logger(mut self, logger: &'static dyn LoggerPort) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Uses one host object for the tabs, windows, runtime and action ports.
    pub fn host<H>(self, host: Rc<H>) -> Self
    where
        H: TabsPort + WindowsPort + RuntimePort + ActionPort + 'static,
    {
        self.tabs(host.clone())
            .windows(host.clone())
            .runtime(host.clone())
            .action(host)
    }

    pub fn tabs(mut self, tabs: Rc<dyn TabsPort>) -> Self {
        self.tabs = Some(tabs);
        self
    }

    pub fn windows(mut self, windows: Rc<dyn WindowsPort>) -> Self {
        self.windows = Some(windows);
        self
    }

    pub fn runtime(mut self, runtime: Rc<dyn RuntimePort>) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn action(mut self, action: Rc<dyn ActionPort>) -> Self {
        self.action = Some(action);
        self
    }

    pub fn styles(mut self, styles: Rc<dyn StyleStorePort>) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn prefs(mut self, prefs: Rc<dyn PrefsPort>) -> Self {
        self.prefs = Some(prefs);
        self
    }

    pub fn spawner(mut self, spawner: Rc<dyn SpawnerPort>) -> Self {
        self.spawner = Some(spawner);
        self
    }

    /// Listener in the calling context; leave unset when there is none.
    pub fn local_delivery(mut self, local_delivery: Rc<dyn LocalDeliveryPort>) -> Self {
        self.local_delivery = Some(local_delivery);
        self
    }

    pub fn build(self) -> Result<Platform, MessagingError> {
        let runtime = self.runtime.ok_or(MessagingError::MissingPort("runtime"))?;
        let config = Rc::new(HostConfig::from_runtime(runtime.as_ref()));

        Ok(Platform {
            logger: self.logger.unwrap_or_else(crate::adapters::logger),
            tabs: self.tabs.ok_or(MessagingError::MissingPort("tabs"))?,
            windows: self.windows.ok_or(MessagingError::MissingPort("windows"))?,
            runtime,
            action: self.action.ok_or(MessagingError::MissingPort("action"))?,
            styles: self.styles.ok_or(MessagingError::MissingPort("styles"))?,
            prefs: self.prefs.ok_or(MessagingError::MissingPort("prefs"))?,
            spawner: self.spawner.ok_or(MessagingError::MissingPort("spawner"))?,
            local_delivery: self.local_delivery,
            config,
        })
    }
}
