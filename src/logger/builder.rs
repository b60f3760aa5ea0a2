//! Stepwise construction so routes can assemble a logger before sharing it.

use super::Logger;
use crate::hook::Hook;
use crate::level::Level;

#[derive(Default)]
pub struct LoggerBuilder {
    logger: Logger,
}

impl LoggerBuilder {
    /// Info threshold, no call-site capture, no hooks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            logger: Logger::new(),
        }
    }

    /// Records below this level reach no hook.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.logger.min_level = level;
        self
    }

    #[must_use]
    pub const fn report_caller(mut self, enabled: bool) -> Self {
        self.logger.report_caller = enabled;
        self
    }

    #[must_use]
    pub fn hook(mut self, hook: impl Hook + 'static) -> Self {
        self.logger.add_hook(hook);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        self.logger
    }
}
