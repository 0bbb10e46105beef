/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// Ordered registry of change callbacks.
///
/// Callbacks run synchronously, in subscription order, and receive a
/// read-only view of the current state.
pub struct Observers<T> {
    next_id: u64,
    callbacks: Vec<(Subscription, Callback<T>)>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` and invoke it once with `current`.
    pub fn subscribe(
        &mut self,
        current: &T,
        mut callback: impl FnMut(&T) + 'static,
    ) -> Subscription {
        let handle = Subscription(self.next_id);
        self.next_id += 1;
        callback(current);
        self.callbacks.push((handle, Box::new(callback)));
        handle
    }

    /// Returns `false` if the handle was not (or no longer) registered.
    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(h, _)| *h != handle);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, state: &T) {
        for (_, callback) in &mut self.callbacks {
            callback(state);
        }
    }
}
