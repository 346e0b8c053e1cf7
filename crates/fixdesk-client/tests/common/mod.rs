// crates/fixdesk-client/tests/common/mod.rs
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use fixdesk_client::api::Backend;
use fixdesk_client::app::App;
use fixdesk_client::config::ClientConfig;
use fixdesk_client::dispatcher::{CompletionRx, Dispatcher};
use fixdesk_client::poller::{TickRx, TickTx};
use fixdesk_core::{ApiCall, HttpReply, Outcome};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::json;
use tokio::sync::mpsc;

type Responder = dyn Fn(&ApiCall) -> (Duration, Outcome) + Send + Sync;

/// In-process backend: answers from a closure, optionally after a
/// (virtual-time) delay, and records every call it receives.
#[derive(Clone)]
pub struct ScriptedBackend {
    calls: Arc<Mutex<Vec<ApiCall>>>,
    respond: Arc<Responder>,
}

impl ScriptedBackend {
    pub fn new(respond: impl Fn(&ApiCall) -> Outcome + Send + Sync + 'static) -> Self {
        Self::with_delays(move |call| (Duration::ZERO, respond(call)))
    }

    pub fn with_delays(
        respond: impl Fn(&ApiCall) -> (Duration, Outcome) + Send + Sync + 'static,
    ) -> Self {
        ScriptedBackend {
            calls: Arc::new(Mutex::new(Vec::new())),
            respond: Arc::new(respond),
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls matching `"METHOD /path"`.
    pub fn count(&self, method_path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| format!("{} {}", c.method().as_str(), c.path()) == method_path)
            .count()
    }
}

impl Backend for ScriptedBackend {
    fn execute(&self, call: ApiCall) -> BoxFuture<'static, Outcome> {
        self.calls.lock().unwrap().push(call.clone());
        let (delay, outcome) = (self.respond)(&call);
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            outcome
        }
        .boxed()
    }
}

/// A backend where everything works.
pub fn healthy(call: &ApiCall) -> Outcome {
    let body = match call {
        ApiCall::Health => json!({ "status": "ok" }),
        ApiCall::FixStatus => json!({
            "status": "RUNNING",
            "details": "Logged on",
            "sessions": ["FIX.4.4:CLIENT->EXCHANGE"],
            "config": {
                "senderCompId": "CLIENT",
                "targetCompId": "EXCHANGE",
                "host": "fix.example.test",
                "port": 9878
            }
        }),
        ApiCall::FixStart | ApiCall::FixStop => json!({ "status": "PENDING" }),
        ApiCall::ListOrders => json!([
            { "id": "ord-1", "symbol": "AAPL", "side": "BUY", "qty": 100, "type": "MARKET", "status": "FILLED" },
            { "orderId": "ord-2", "symbol": "MSFT", "side": "SELL", "orderQty": "50", "ordType": "LIMIT", "price": 410, "ordStatus": "NEW" }
        ]),
        ApiCall::SubmitOrder(_) => json!({ "message": "Order accepted", "orderId": "ord-9" }),
        ApiCall::OrderDetails(id) => json!({ "orderId": id, "status": "NEW", "symbol": "MSFT" }),
    };
    Ok(HttpReply::ok(body))
}

/// App wired to a scripted backend, with a handle on both channels.
pub struct Harness {
    pub app: App,
    pub backend: ScriptedBackend,
    pub ticks: TickRx,
    completions: CompletionRx,
    tick_tx: Option<TickTx>,
}

impl Harness {
    pub fn new(backend: ScriptedBackend) -> Self {
        Self::with_config(backend, &ClientConfig::default())
    }

    pub fn with_config(backend: ScriptedBackend, config: &ClientConfig) -> Self {
        let (dispatcher, completions) = Dispatcher::new(Arc::new(backend.clone()));
        let (tick_tx, ticks) = mpsc::unbounded_channel();
        Harness {
            app: App::new(config, dispatcher),
            backend,
            ticks,
            completions,
            tick_tx: Some(tick_tx),
        }
    }

    /// Mount with the harness tick channel. Only the first call has a
    /// sender to hand over.
    pub fn mount(&mut self) {
        let tx = self.tick_tx.take().expect("harness mounted twice");
        self.app.mount(tx);
    }

    /// Feed completions back until nothing is in flight, including any
    /// follow-up requests they trigger.
    pub async fn settle(&mut self) {
        while self.app.pending_requests() > 0 {
            let completion = self
                .completions
                .recv()
                .await
                .expect("dispatcher keeps the channel open");
            self.app.handle_completion(completion);
        }
    }

    /// Apply every completion that has already arrived.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions.try_recv() {
            self.app.handle_completion(completion);
            applied += 1;
        }
        applied
    }

    /// Run the dashboard loop for `total` of virtual time in 100 ms
    /// frames: apply finished requests, then coalesce due ticks into one
    /// poll cycle. `frame` sees the app after every step.
    pub async fn run_for(&mut self, total: Duration, mut frame: impl FnMut(&App)) {
        let step = Duration::from_millis(100);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            tokio::time::sleep(step).await;
            elapsed += step;

            self.drain();
            let mut poll_due = false;
            while self.ticks.try_recv().is_ok() {
                poll_due = true;
            }
            if poll_due {
                self.app.on_tick();
            }
            frame(&self.app);
        }
    }
}
