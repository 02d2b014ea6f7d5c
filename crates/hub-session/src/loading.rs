use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared boolean a caller can hand out as a loading callback.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Callback that writes into this flag.
    #[must_use]
    pub fn setter(&self) -> impl FnMut(bool) + Send + 'static {
        let flag = Arc::clone(&self.0);
        move |on| flag.store(on, Ordering::SeqCst)
    }
}
