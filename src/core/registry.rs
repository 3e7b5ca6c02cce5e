//! Category hierarchy and record dispatch
//!
//! Categories form a dot-separated hierarchy ("app.net.http" is a child of
//! "app.net"). Each category carries an effective level and an ordered list
//! of handlers; an incoming record is delivered to the handlers of the
//! nearest ancestor category that has any.

use super::handler::LogHandler;
use super::level::Level;
use super::record::LogRecord;
use super::Result;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
struct Category {
    level: Level,
    handlers: Vec<Arc<dyn LogHandler>>,
}

/// Owns the category hierarchy and routes records to handlers.
///
/// The registry lock covers only lookups and handler-list swaps; handlers
/// are invoked outside it, so reconfiguration never waits behind delivery
/// I/O and delivery never waits behind reconfiguration beyond the swap.
#[derive(Default)]
pub struct CategoryRegistry {
    categories: RwLock<HashMap<String, Category>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler to a category's ordered handler list, creating the
    /// category if needed.
    pub fn install_handler(&self, category: &str, handler: Arc<dyn LogHandler>) {
        let mut categories = self.categories.write();
        categories
            .entry(category.to_string())
            .or_default()
            .handlers
            .push(handler);
    }

    /// Replace a category's entire handler list.
    ///
    /// This is the reconfiguration path: handlers are immutable apart from
    /// their gate level, so changing a formatter or writer means building a
    /// new handler and swapping it in here.
    pub fn replace_handlers(&self, category: &str, handlers: Vec<Arc<dyn LogHandler>>) {
        let mut categories = self.categories.write();
        categories.entry(category.to_string()).or_default().handlers = handlers;
    }

    /// Set a category's effective level. Records below it are dropped before
    /// any handler is consulted.
    pub fn set_category_level(&self, category: &str, level: Level) {
        let mut categories = self.categories.write();
        categories.entry(category.to_string()).or_default().level = level;
    }

    /// Deliver a record to the handlers of the nearest ancestor category.
    pub fn dispatch(&self, record: &LogRecord) {
        let (handlers, handler_category) = {
            let categories = self.categories.read();
            let mut name: &str = &record.category;
            loop {
                if let Some(category) = categories.get(name) {
                    if record.level < category.level {
                        return;
                    }
                    if !category.handlers.is_empty() {
                        break (category.handlers.clone(), name.to_string());
                    }
                }
                match name.rfind('.') {
                    Some(split) => name = &name[..split],
                    None if !name.is_empty() => name = "",
                    None => return,
                }
            }
        };

        for handler in &handlers {
            handler.handle_message(record, &handler_category);
        }
    }

    /// Flush every installed handler.
    pub fn flush_all(&self) -> Result<()> {
        let handlers: Vec<Arc<dyn LogHandler>> = {
            let categories = self.categories.read();
            categories
                .values()
                .flat_map(|category| category.handlers.iter().cloned())
                .collect()
        };

        for handler in &handlers {
            handler.flush()?;
        }
        Ok(())
    }
}
