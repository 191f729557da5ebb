use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::task::{Context, Poll};

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace, warn};

use crate::bridge::coerce::{ReturnValue, coerce};
use crate::bridge::engine::{EngineFault, ScriptEngine};
use crate::command::{Command, ResultShape};
use crate::foundation::error::BridgeError;
use crate::object::ids::ObjectRegistry;

/// Dispatcher settings.
#[derive(Clone, Debug)]
pub struct BridgeOpts {
    /// Name attached to log records, useful when several maps share a process.
    pub label: String,
    /// Log every script at `TRACE` before it is evaluated.
    pub trace_scripts: bool,
    /// Drop queued commands whose caller stopped waiting before their turn came.
    pub skip_cancelled: bool,
}

impl Default for BridgeOpts {
    fn default() -> Self {
        Self {
            label: "map".to_owned(),
            trace_scripts: false,
            skip_cancelled: true,
        }
    }
}

struct Job {
    seq: u64,
    script: String,
    shape: ResultShape,
    reply: oneshot::Sender<ReturnValue>,
}

#[derive(Debug)]
struct Shared {
    opts: BridgeOpts,
    closed: AtomicBool,
    next_seq: AtomicU64,
}

/// Cloneable handle that queues commands for the engine.
///
/// Commands are evaluated one at a time in the order [`Bridge::submit`] was called, across all
/// clones of the handle. Every outcome, failures included, comes back as a [`ReturnValue`].
#[derive(Clone, Debug)]
pub struct Bridge {
    tx: mpsc::UnboundedSender<Job>,
    shared: Arc<Shared>,
}

/// The evaluation loop; owns the engine and drains the queue.
pub struct BridgeWorker {
    rx: mpsc::UnboundedReceiver<Job>,
    engine: Arc<dyn ScriptEngine>,
    shared: Arc<Shared>,
}

impl Bridge {
    /// Create a handle and the worker that must be driven for it to make progress.
    pub fn new(engine: Arc<dyn ScriptEngine>, opts: BridgeOpts) -> (Bridge, BridgeWorker) {
        let (tx, rx) = mpsc::unbounded_channel();
        let shared = Arc::new(Shared {
            opts,
            closed: AtomicBool::new(false),
            next_seq: AtomicU64::new(0),
        });
        let bridge = Bridge {
            tx,
            shared: Arc::clone(&shared),
        };
        let worker = BridgeWorker { rx, engine, shared };
        (bridge, worker)
    }

    /// Create a handle and run its worker on the current tokio runtime.
    pub fn spawn(engine: Arc<dyn ScriptEngine>, opts: BridgeOpts) -> Bridge {
        let (bridge, worker) = Bridge::new(engine, opts);
        tokio::spawn(worker.run());
        bridge
    }

    /// Render `cmd` and queue it.
    ///
    /// The queue position is fixed by this call, not by when the returned future is first
    /// polled. Dropping the future cancels the command if it has not started yet.
    pub fn submit(&self, cmd: &dyn Command) -> PendingResult {
        if self.is_closed() {
            return PendingResult::ready(BridgeError::EngineUnavailable.into());
        }
        let script = match cmd.render() {
            Ok(script) => script,
            Err(err) => return PendingResult::ready(err.into()),
        };
        let (reply, rx) = oneshot::channel();
        let job = Job {
            seq: self.shared.next_seq.fetch_add(1, Ordering::Relaxed),
            script,
            shape: cmd.shape(),
            reply,
        };
        match self.tx.send(job) {
            Ok(()) => PendingResult {
                state: Pending::Waiting(rx),
            },
            Err(_) => PendingResult::ready(BridgeError::EngineUnavailable.into()),
        }
    }

    /// Queue `cmd` and wait for its result.
    pub async fn execute(&self, cmd: &dyn Command) -> ReturnValue {
        self.submit(cmd).await
    }

    /// Like [`Bridge::execute`], but keeps `registry` in step with the engine.
    ///
    /// Referenced identifiers must already be live, otherwise the command is rejected with
    /// [`BridgeError::ProtocolViolation`] and never sent. A declared identifier is recorded only
    /// once the engine has evaluated the declaration successfully.
    #[tracing::instrument(level = "debug", skip_all, fields(label = %self.shared.opts.label))]
    pub async fn execute_checked(
        &self,
        cmd: &dyn Command,
        registry: &mut ObjectRegistry,
    ) -> ReturnValue {
        if let Err(err) = cmd.validate(registry) {
            warn!(%err, "command rejected before dispatch");
            return err.into();
        }
        if let Some(id) = cmd.declares()
            && registry.contains(id)
        {
            return BridgeError::validation(format!("identifier '{id}' is already declared")).into();
        }
        let result = self.execute(cmd).await;
        if !result.is_error()
            && let Some(id) = cmd.declares()
        {
            registry.register(id.clone());
        }
        result
    }

    /// Refuse every command from now on, including ones already queued.
    pub fn close(&self) {
        self.shared.closed.store(true, Ordering::SeqCst);
    }

    /// Whether [`Bridge::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::SeqCst)
    }

    /// Dispatcher settings.
    pub fn opts(&self) -> &BridgeOpts {
        &self.shared.opts
    }
}

impl BridgeWorker {
    /// Evaluate queued commands until every [`Bridge`] handle is dropped.
    #[tracing::instrument(name = "bridge_worker", skip_all, fields(label = %self.shared.opts.label))]
    pub async fn run(mut self) {
        while let Some(job) = self.rx.recv().await {
            process(self.engine.as_ref(), &self.shared, job).await;
        }
        debug!("all bridge handles dropped; worker exiting");
    }
}

async fn process(engine: &dyn ScriptEngine, shared: &Shared, job: Job) {
    let opts = &shared.opts;
    if opts.skip_cancelled && job.reply.is_closed() {
        debug!(seq = job.seq, "skipping cancelled command");
        return;
    }

    let value: ReturnValue = if shared.closed.load(Ordering::SeqCst) || !engine.is_ready() {
        BridgeError::EngineUnavailable.into()
    } else {
        if opts.trace_scripts {
            trace!(seq = job.seq, script = %job.script, "evaluate");
        }
        match engine.evaluate(&job.script).await {
            Ok(raw) => coerce(raw, job.shape),
            Err(EngineFault::Exception(msg)) => BridgeError::remote(msg).into(),
            Err(EngineFault::Unavailable) => BridgeError::EngineUnavailable.into(),
            Err(EngineFault::Host(err)) => {
                warn!(seq = job.seq, error = %err, "host failed to evaluate script");
                BridgeError::remote(err.to_string()).into()
            }
        }
    };

    match &value {
        ReturnValue::Error(BridgeError::EngineUnavailable) => {
            warn!(seq = job.seq, "script engine unavailable");
        }
        ReturnValue::Error(err @ BridgeError::CoercionFailed(_)) => {
            warn!(seq = job.seq, %err, "unexpected result shape");
        }
        ReturnValue::Error(err) => debug!(seq = job.seq, %err, "command failed"),
        _ => {}
    }

    if job.reply.send(value).is_err() {
        debug!(seq = job.seq, "caller went away; result discarded");
    }
}

enum Pending {
    Ready(Option<ReturnValue>),
    Waiting(oneshot::Receiver<ReturnValue>),
}

/// Result of a submitted command.
///
/// Resolves to [`BridgeError::EngineUnavailable`] if the worker is dropped before answering.
#[must_use = "dropping a pending result cancels the command"]
pub struct PendingResult {
    state: Pending,
}

impl PendingResult {
    fn ready(value: ReturnValue) -> Self {
        Self {
            state: Pending::Ready(Some(value)),
        }
    }
}

impl Future for PendingResult {
    type Output = ReturnValue;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<ReturnValue> {
        match &mut self.get_mut().state {
            Pending::Ready(value) => Poll::Ready(
                value
                    .take()
                    .unwrap_or(ReturnValue::Error(BridgeError::EngineUnavailable)),
            ),
            Pending::Waiting(rx) => Pin::new(rx)
                .poll(cx)
                .map(|res| res.unwrap_or(ReturnValue::Error(BridgeError::EngineUnavailable))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bridge/dispatcher.rs"]
mod tests;
