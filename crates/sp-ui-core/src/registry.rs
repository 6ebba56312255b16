//! Listener bookkeeping keyed by UI component.
//!
//! The wasm crate stores one handle per attached listener; dropping a handle
//! detaches it. Tearing down a component hands its handles back in
//! registration order.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Tooltips,
    Alerts,
    FormValidation,
    Clipboard,
    NumberFormatting,
    Confirmations,
    Navigation,
    Search,
    Modals,
    Toasts,
}

impl Component {
    pub fn name(self) -> &'static str {
        match self {
            Component::Tooltips => "tooltips",
            Component::Alerts => "alerts",
            Component::FormValidation => "form-validation",
            Component::Clipboard => "clipboard",
            Component::NumberFormatting => "number-formatting",
            Component::Confirmations => "confirmations",
            Component::Navigation => "navigation",
            Component::Search => "search",
            Component::Modals => "modals",
            Component::Toasts => "toasts",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
pub struct Registry<H> {
    entries: Vec<(Component, H)>,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> Registry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, component: Component, handle: H) {
        self.entries.push((component, handle));
    }

    pub fn count(&self, component: Component) -> usize {
        self.entries.iter().filter(|(c, _)| *c == component).count()
    }

    pub fn teardown(&mut self, component: Component) -> Vec<H> {
        let (removed, kept): (Vec<_>, Vec<_>) = self
            .entries
            .drain(..)
            .partition(|(c, _)| *c == component);
        self.entries = kept;
        removed.into_iter().map(|(_, h)| h).collect()
    }

    pub fn teardown_all(&mut self) -> Vec<H> {
        self.entries.drain(..).map(|(_, h)| h).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Detach {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl Drop for Detach {
        fn drop(&mut self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn teardown_only_touches_one_component() {
        let mut reg = Registry::new();
        reg.register(Component::Search, "search-1");
        reg.register(Component::Clipboard, "copy-1");
        reg.register(Component::Search, "search-2");

        assert_eq!(reg.count(Component::Search), 2);

        let removed = reg.teardown(Component::Search);
        assert_eq!(removed, vec!["search-1", "search-2"]);
        assert_eq!(reg.count(Component::Search), 0);
        assert_eq!(reg.count(Component::Clipboard), 1);
        assert!(reg.teardown(Component::Modals).is_empty());
    }

    #[test]
    fn dropping_torn_down_handles_detaches_them() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut reg = Registry::new();
        for (id, component) in [(1, Component::Alerts), (2, Component::Modals), (3, Component::Alerts)] {
            reg.register(component, Detach { id, log: Rc::clone(&log) });
        }

        drop(reg.teardown(Component::Alerts));
        assert_eq!(*log.borrow(), vec![1, 3]);

        drop(reg.teardown_all());
        assert_eq!(*log.borrow(), vec![1, 3, 2]);
        assert!(reg.teardown_all().is_empty());
    }
}
