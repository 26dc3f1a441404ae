//! Wraps sync and async work in timing scopes and reports to a receiver

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::ProfilerConfig;
use crate::error::ProfilerError;
use crate::receiver::ProfilingReceiver;
use crate::record::{ProfilingRecord, SourceLocation};
use crate::tag::effective_tag;
use crate::token::TimingToken;

/// Times how long wrapped work takes and hands the result to a receiver.
///
/// Every entry point takes an optional tag. An empty tag is replaced by
/// `File: <file>, Line: <line>` of the call site. Work runs on the caller's
/// thread (or inside the caller's future) and its value, `Err` or panic comes
/// back unchanged; timing never alters the outcome.
///
/// A disabled runner still times its work but never delivers anything.
pub struct TimedRunner {
    receiver: Arc<dyn ProfilingReceiver>,
    enabled: AtomicBool,
}

impl TimedRunner {
    /// Create a disabled runner that reports to `receiver`.
    pub fn new<R>(receiver: R) -> Self
    where
        R: ProfilingReceiver + 'static,
    {
        Self::from_shared(Arc::new(receiver))
    }

    /// Create a disabled runner over a receiver shared with other runners.
    pub fn from_shared(receiver: Arc<dyn ProfilingReceiver>) -> Self {
        TimedRunner {
            receiver,
            enabled: AtomicBool::new(false),
        }
    }

    /// Fails immediately when no receiver was wired in.
    pub fn try_new(receiver: Option<Arc<dyn ProfilingReceiver>>) -> Result<Self, ProfilerError> {
        Self::builder().maybe_receiver(receiver).build()
    }

    pub fn from_config(receiver: Arc<dyn ProfilingReceiver>, config: &ProfilerConfig) -> Self {
        let runner = Self::from_shared(receiver);
        runner.set_enabled(config.enabled);
        runner
    }

    pub fn builder() -> TimedRunnerBuilder {
        TimedRunnerBuilder::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        tracing::debug!(enabled = enabled, "Timed runner toggled");
    }

    pub fn receiver(&self) -> &Arc<dyn ProfilingReceiver> {
        &self.receiver
    }

    /// Run `work` and report how long it took under a tag derived from the call site.
    #[track_caller]
    pub fn time<T>(&self, work: impl FnOnce() -> T) -> T {
        self.time_at(SourceLocation::caller(), "", work)
    }

    #[track_caller]
    pub fn time_tagged<T>(&self, tag: &str, work: impl FnOnce() -> T) -> T {
        self.time_at(SourceLocation::caller(), tag, work)
    }

    #[track_caller]
    pub fn time_void(&self, work: impl FnOnce()) {
        self.time_at(SourceLocation::caller(), "", work)
    }

    #[track_caller]
    pub fn time_void_tagged(&self, tag: &str, work: impl FnOnce()) {
        self.time_at(SourceLocation::caller(), tag, work)
    }

    /// Synchronous core: every sync entry point ends up here.
    pub fn time_at<T>(&self, location: SourceLocation, tag: &str, work: impl FnOnce() -> T) -> T {
        let token = self.open_scope(effective_tag(tag, &location), location);
        let output = work();
        token.close();
        output
    }

    /// Await the future produced by `work` and report how long it took.
    ///
    /// The clock starts on the first poll and keeps running while the work is
    /// suspended. Dropping the returned future early still reports the time
    /// spent so far.
    #[track_caller]
    pub fn time_async<'a, F, Fut>(&'a self, work: F) -> impl Future<Output = Fut::Output> + 'a
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future + 'a,
    {
        self.time_async_at(SourceLocation::caller(), "", work)
    }

    #[track_caller]
    pub fn time_async_tagged<'a, F, Fut>(
        &'a self,
        tag: &str,
        work: F,
    ) -> impl Future<Output = Fut::Output> + 'a
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future + 'a,
    {
        self.time_async_at(SourceLocation::caller(), tag, work)
    }

    #[track_caller]
    pub fn time_async_void<'a, F, Fut>(&'a self, work: F) -> impl Future<Output = ()> + 'a
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = ()> + 'a,
    {
        self.time_async_at(SourceLocation::caller(), "", work)
    }

    #[track_caller]
    pub fn time_async_void_tagged<'a, F, Fut>(
        &'a self,
        tag: &str,
        work: F,
    ) -> impl Future<Output = ()> + 'a
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = ()> + 'a,
    {
        self.time_async_at(SourceLocation::caller(), tag, work)
    }

    /// Asynchronous core: every async entry point ends up here.
    pub fn time_async_at<'a, F, Fut>(
        &'a self,
        location: SourceLocation,
        tag: &str,
        work: F,
    ) -> impl Future<Output = Fut::Output> + 'a
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future + 'a,
    {
        let tag = effective_tag(tag, &location);
        async move {
            let token = self.open_scope(tag, location);
            let output = work().await;
            token.close();
            output
        }
    }

    fn open_scope(
        &self,
        tag: String,
        location: SourceLocation,
    ) -> TimingToken<impl FnOnce(ProfilingRecord) + Send + 'static> {
        let receiver = Arc::clone(&self.receiver);
        let silent = !self.is_enabled();
        TimingToken::open(
            move |record| receiver.on_information_received(record),
            tag,
            silent,
            location,
        )
    }
}

impl fmt::Debug for TimedRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedRunner")
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

/// Builds a [`TimedRunner`], rejecting a missing receiver up front.
#[derive(Default)]
pub struct TimedRunnerBuilder {
    receiver: Option<Arc<dyn ProfilingReceiver>>,
    enabled: bool,
}

impl TimedRunnerBuilder {
    pub fn receiver<R>(self, receiver: R) -> Self
    where
        R: ProfilingReceiver + 'static,
    {
        self.shared_receiver(Arc::new(receiver))
    }

    pub fn shared_receiver(mut self, receiver: Arc<dyn ProfilingReceiver>) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn maybe_receiver(mut self, receiver: Option<Arc<dyn ProfilingReceiver>>) -> Self {
        self.receiver = receiver;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Take `enabled` from configuration
    pub fn config(self, config: &ProfilerConfig) -> Self {
        self.enabled(config.enabled)
    }

    pub fn build(self) -> Result<TimedRunner, ProfilerError> {
        let Some(receiver) = self.receiver else {
            let err = ProfilerError::missing_receiver();
            tracing::error!(error = %err, "Cannot build timed runner");
            return Err(err);
        };
        let runner = TimedRunner::from_shared(receiver);
        runner.enabled.store(self.enabled, Ordering::Relaxed);
        tracing::debug!(enabled = self.enabled, "Timed runner built");
        Ok(runner)
    }
}
