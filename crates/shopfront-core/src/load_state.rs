// ── Load-state ──
//
// The (loading, error, data) triple a page renders from. Renderers read
// `phase()`; pages mutate through `begin` / `succeed` / `fail`.

/// Derived view of a [`LoadState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A fetch is in flight. Nothing else renders.
    Loading,
    /// The last fetch failed. The error message renders.
    Failed,
    /// The last fetch succeeded.
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    loading: bool,
    error: Option<String>,
    data: Option<T>,
}

impl<T> LoadState<T> {
    /// A state at the start of a fetch: loading, no error, no data.
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
        }
    }

    /// Reset for a new fetch cycle. Stale error and data are dropped.
    pub fn begin(&mut self) {
        *self = Self::loading();
    }

    /// Record a successful fetch.
    pub fn succeed(&mut self, data: T) {
        self.loading = false;
        self.error = None;
        self.data = Some(data);
    }

    /// Record a failed fetch with a user-facing message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else {
            Phase::Ready
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::loading()
    }
}
