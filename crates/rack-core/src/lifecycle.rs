//! Mount/unmount bookkeeping shared by every callback of a mounted view.

use std::cell::Cell;
use std::rc::Rc;

/// Cheap handle callbacks hold to check whether the view is still mounted.
#[derive(Clone, Debug)]
pub struct AliveFlag(Rc<Cell<bool>>);

impl AliveFlag {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }
}

/// Owns the teardown actions of a mounted view.
///
/// `unmount` flips the shared flag first, so callbacks that fire while the
/// actions run are already inert, then runs each action once in reverse
/// registration order.
pub struct Lifecycle {
    alive: Rc<Cell<bool>>,
    teardown: Vec<(&'static str, Box<dyn FnOnce()>)>,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
            teardown: Vec::new(),
        }
    }

    pub fn flag(&self) -> AliveFlag {
        AliveFlag(self.alive.clone())
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.alive.get()
    }

    /// Register an action to run on unmount. After unmount it runs immediately.
    pub fn on_teardown(&mut self, name: &'static str, action: impl FnOnce() + 'static) {
        if self.is_mounted() {
            self.teardown.push((name, Box::new(action)));
        } else {
            action();
        }
    }

    /// Returns false if the view was already unmounted.
    pub fn unmount(&mut self) -> bool {
        if !self.alive.replace(false) {
            return false;
        }
        while let Some((name, action)) = self.teardown.pop() {
            log::debug!("[lifecycle] releasing {}", name);
            action();
        }
        true
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.unmount();
    }
}
