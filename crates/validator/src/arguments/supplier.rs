//! Deferred success values.

use std::fmt;
use std::sync::{Arc, OnceLock};

/// A deferred value. Every [`get`](Self::get) runs the wrapped function
/// again.
pub struct Supplier<X> {
    supply: Arc<dyn Fn() -> X + Send + Sync>,
}

impl<X> Supplier<X> {
    /// Wraps `supply`.
    pub fn new(supply: impl Fn() -> X + Send + Sync + 'static) -> Self {
        Self {
            supply: Arc::new(supply),
        }
    }

    /// Computes the value.
    pub fn get(&self) -> X {
        (self.supply)()
    }

    /// Converts into a supplier that computes the value at most once.
    #[must_use]
    pub fn memoized(self) -> MemoizedSupplier<X> {
        MemoizedSupplier {
            supplier: self,
            value: OnceLock::new(),
        }
    }
}

impl<X> Clone for Supplier<X> {
    fn clone(&self) -> Self {
        Self {
            supply: Arc::clone(&self.supply),
        }
    }
}

impl<X> fmt::Debug for Supplier<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supplier").finish_non_exhaustive()
    }
}

/// A [`Supplier`] whose value is computed on first access and cached.
pub struct MemoizedSupplier<X> {
    supplier: Supplier<X>,
    value: OnceLock<X>,
}

impl<X> MemoizedSupplier<X> {
    /// Returns the value, computing it on first call.
    pub fn get(&self) -> &X {
        self.value.get_or_init(|| self.supplier.get())
    }

    /// Returns true once the value has been computed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }
}

impl<X: fmt::Debug> fmt::Debug for MemoizedSupplier<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoizedSupplier")
            .field("value", &self.value.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting() -> (Arc<AtomicUsize>, Supplier<usize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let supplier = Supplier::new(move || counter.fetch_add(1, Ordering::SeqCst) + 1);
        (calls, supplier)
    }

    #[test]
    fn supplier_reruns_on_every_get() {
        let (calls, supplier) = counting();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(supplier.get(), 1);
        assert_eq!(supplier.get(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn memoized_supplier_runs_once() {
        let (calls, supplier) = counting();
        let memoized = supplier.memoized();
        assert!(!memoized.is_initialized());
        assert_eq!(*memoized.get(), 1);
        assert_eq!(*memoized.get(), 1);
        assert!(memoized.is_initialized());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
