// crates/fixdesk-client/tests/dashboard_flow.rs
mod common;

use std::time::Duration;

use common::{healthy, Harness, ScriptedBackend};
use fixdesk_client::app::Panel;
use fixdesk_core::{ApiCall, HttpReply, OrderType, SubmitKind, TransportError};
use serde_json::json;

#[tokio::test(start_paused = true)]
async fn mount_fetches_health_status_and_orders_once() {
    let mut h = Harness::new(ScriptedBackend::new(healthy));
    h.mount();
    assert_eq!(h.app.pending_requests(), 3);
    h.settle().await;

    assert_eq!(h.backend.count("GET /health"), 1);
    assert_eq!(h.backend.count("GET /fix/status"), 1);
    assert_eq!(h.backend.count("GET /orders"), 1);
    assert_eq!(h.backend.calls().len(), 3);

    assert!(h.app.health.is_ok());
    assert_eq!(h.app.session.current_status(), "RUNNING");
    assert_eq!(h.app.blotter.rows().len(), 2);
    assert_eq!(h.app.blotter.rows()[1].id, "ord-2");
    assert!(h.app.last_orders_sync.is_some());
    assert_eq!(h.app.message_count, 3);
}

#[tokio::test(start_paused = true)]
async fn each_tick_polls_status_and_orders_but_not_health() {
    let mut h = Harness::new(ScriptedBackend::new(healthy));
    let mounted_at = tokio::time::Instant::now();
    h.mount();
    h.settle().await;

    h.ticks.recv().await.expect("timer running");
    assert!(mounted_at.elapsed() >= Duration::from_millis(2000));
    h.app.on_tick();
    h.settle().await;

    h.ticks.recv().await.expect("timer running");
    h.app.on_tick();
    h.settle().await;

    assert_eq!(h.backend.count("GET /health"), 1);
    assert_eq!(h.backend.count("GET /fix/status"), 3);
    assert_eq!(h.backend.count("GET /orders"), 3);
}

#[tokio::test(start_paused = true)]
async fn retry_key_rechecks_health() {
    let mut h = Harness::new(ScriptedBackend::new(|call| match call {
        ApiCall::Health => Err(TransportError::Connect("refused".into())),
        other => healthy(other),
    }));
    h.mount();
    h.settle().await;
    assert_eq!(
        h.app.health.message(),
        "Backend: unreachable. Make sure the API is running."
    );

    h.app.check_health();
    h.settle().await;
    assert_eq!(h.backend.count("GET /health"), 2);
}

#[tokio::test(start_paused = true)]
async fn market_submit_posts_without_price_and_refreshes_blotter_once() {
    let mut h = Harness::new(ScriptedBackend::new(healthy));
    h.mount();
    h.settle().await;
    assert_eq!(h.backend.count("GET /orders"), 1);

    h.app.ticket.form.symbol = "aapl".into();
    h.app.ticket.form.qty = "100".into();
    h.app.ticket.form.price = "99".into();
    assert!(h.app.submit_order());
    h.settle().await;

    let posted: Vec<_> = h
        .backend
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            ApiCall::SubmitOrder(payload) => Some(payload),
            _ => None,
        })
        .collect();
    assert_eq!(posted.len(), 1);

    let body = serde_json::to_value(&posted[0]).unwrap();
    assert_eq!(
        body,
        json!({ "symbol": "AAPL", "side": "BUY", "qty": 100, "type": "MARKET", "tif": "DAY" })
    );

    // exactly one out-of-band refresh on top of the mount fetch
    assert_eq!(h.backend.count("GET /orders"), 2);

    let result = h.app.ticket.result().expect("result shown");
    assert_eq!(result.kind, SubmitKind::Success);
    assert_eq!(result.message, "Order accepted");
    assert_eq!(h.app.ticket.form.price, "");
}

#[tokio::test(start_paused = true)]
async fn limit_without_price_sends_nothing() {
    let mut h = Harness::new(ScriptedBackend::new(healthy));
    h.mount();
    h.settle().await;
    let before = h.backend.calls().len();

    h.app.ticket.form.order_type = OrderType::Limit;
    h.app.ticket.form.price.clear();
    assert!(!h.app.submit_order());

    assert_eq!(h.app.pending_requests(), 0);
    assert_eq!(h.backend.calls().len(), before);
    assert_eq!(
        h.app.ticket.form_error().map(|e| e.to_string()).as_deref(),
        Some("LIMIT orders require a valid price.")
    );
}

#[tokio::test(start_paused = true)]
async fn double_submit_posts_once() {
    let mut h = Harness::new(ScriptedBackend::with_delays(|call| {
        let delay = match call {
            ApiCall::SubmitOrder(_) => Duration::from_millis(300),
            _ => Duration::ZERO,
        };
        (delay, healthy(call))
    }));

    assert!(h.app.submit_order());
    assert!(h.app.ticket.is_submitting());
    assert!(!h.app.submit_order());
    h.settle().await;

    assert_eq!(h.backend.count("POST /orders"), 1);
    assert!(!h.app.ticket.is_submitting());
}

#[tokio::test(start_paused = true)]
async fn failed_submit_does_not_refresh_blotter() {
    let mut h = Harness::new(ScriptedBackend::new(|call| match call {
        ApiCall::SubmitOrder(_) => Ok(HttpReply::status_only(404)),
        other => healthy(other),
    }));

    assert!(h.app.submit_order());
    h.settle().await;

    assert_eq!(h.backend.count("GET /orders"), 0);
    let result = h.app.ticket.result().expect("result");
    assert_eq!(result.kind, SubmitKind::Error);
    assert!(result.message.contains("/orders"));
}

#[tokio::test(start_paused = true)]
async fn session_start_refetches_status_on_success() {
    let mut h = Harness::new(ScriptedBackend::new(healthy));
    h.mount();
    h.settle().await;

    h.app.start_session();
    h.settle().await;

    assert_eq!(h.backend.count("POST /fix/start"), 1);
    assert_eq!(h.backend.count("GET /fix/status"), 2);
    // the POST body ("PENDING") never becomes the displayed status
    assert_eq!(h.app.session.current_status(), "RUNNING");
    assert!(h.app.session.error().is_none());
}

#[tokio::test(start_paused = true)]
async fn session_stop_failure_keeps_status_and_skips_refetch() {
    let mut h = Harness::new(ScriptedBackend::new(|call| match call {
        ApiCall::FixStop => Ok(HttpReply::status_only(503)),
        other => healthy(other),
    }));
    h.mount();
    h.settle().await;

    h.app.stop_session();
    h.settle().await;

    assert_eq!(h.backend.count("GET /fix/status"), 1);
    assert_eq!(h.app.session.current_status(), "RUNNING");
    assert_eq!(
        h.app.session.error(),
        Some("FIX request failed with status 503. Please try again.")
    );
}

#[tokio::test(start_paused = true)]
async fn late_detail_reply_for_previous_selection_is_dropped() {
    let mut h = Harness::new(ScriptedBackend::with_delays(|call| {
        let delay = match call {
            ApiCall::OrderDetails(id) if id == "ord-2" => Duration::from_millis(500),
            _ => Duration::from_millis(10),
        };
        (delay, healthy(call))
    }));

    h.app.select_order(Some("ord-2".into()));
    h.app.select_order(Some("ord-3".into()));
    assert!(h.app.detail.is_loading());
    h.settle().await;

    assert_eq!(h.backend.count("GET /orders/ord-2"), 1);
    assert_eq!(h.backend.count("GET /orders/ord-3"), 1);
    assert_eq!(h.app.detail.selected(), Some("ord-3"));
    let shown = h.app.detail.visible_details().expect("ord-3 loaded");
    assert_eq!(shown.id(), "ord-3");
    assert!(!h.app.detail.is_loading());
}

#[tokio::test(start_paused = true)]
async fn reselect_and_deselect_issue_no_requests() {
    let mut h = Harness::new(ScriptedBackend::new(healthy));

    h.app.select_order(Some("ord-1".into()));
    h.settle().await;
    assert_eq!(h.backend.calls().len(), 1);

    h.app.select_order(Some("ord-1".into()));
    assert_eq!(h.app.pending_requests(), 0);

    h.app.close_detail();
    assert_eq!(h.app.pending_requests(), 0);
    assert_eq!(h.backend.calls().len(), 1);
    assert!(h.app.detail.selected().is_none());
    assert!(h.app.detail.details().is_none());
    assert!(h.app.detail.error().is_none());
    assert!(!h.app.detail.is_loading());
}

#[tokio::test(start_paused = true)]
async fn deselect_while_loading_discards_the_reply() {
    let mut h = Harness::new(ScriptedBackend::with_delays(|call| {
        (Duration::from_millis(200), healthy(call))
    }));

    h.app.select_order(Some("ord-1".into()));
    h.app.close_detail();
    h.settle().await;

    assert!(h.app.detail.details().is_none());
    assert!(h.app.detail.selected().is_none());
}

#[tokio::test(start_paused = true)]
async fn refresh_reissues_detail_request() {
    let mut h = Harness::new(ScriptedBackend::new(healthy));
    h.app.refresh_detail();
    assert_eq!(h.app.pending_requests(), 0);

    h.app.select_order(Some("ord-1".into()));
    h.settle().await;
    h.app.refresh_detail();
    h.settle().await;

    assert_eq!(h.backend.count("GET /orders/ord-1"), 2);
}

#[tokio::test(start_paused = true)]
async fn blotter_cursor_opens_the_row_under_it() {
    let mut h = Harness::new(ScriptedBackend::new(healthy));
    h.mount();
    h.settle().await;

    h.app.current_panel = Panel::Blotter;
    h.app.move_selection_down();
    h.app.move_selection_down();
    assert_eq!(h.app.blotter.cursor(), 1);

    h.app.open_selected_order();
    h.settle().await;

    assert_eq!(h.backend.count("GET /orders/ord-2"), 1);
    assert_eq!(h.app.detail.selected(), Some("ord-2"));
}

#[tokio::test(start_paused = true)]
async fn row_without_id_is_not_opened() {
    let mut h = Harness::new(ScriptedBackend::new(|call| match call {
        ApiCall::ListOrders => Ok(HttpReply::ok(json!([{ "symbol": "AAPL" }]))),
        other => healthy(other),
    }));
    h.mount();
    h.settle().await;
    assert_eq!(h.app.blotter.rows()[0].id, "--");

    h.app.open_selected_order();
    assert_eq!(h.app.pending_requests(), 0);
    assert!(h.app.detail.selected().is_none());
}

#[tokio::test(start_paused = true)]
async fn slow_poll_reply_does_not_overwrite_newer_orders() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let mut h = Harness::new(ScriptedBackend::with_delays(move |call| match call {
        ApiCall::ListOrders => {
            // first list is slow and stale, second is fast
            let n = counter.fetch_add(1, Ordering::SeqCst);
            let (delay, id) = if n == 0 {
                (Duration::from_millis(800), "old")
            } else {
                (Duration::from_millis(10), "new")
            };
            (delay, Ok(HttpReply::ok(json!([{ "id": id }]))))
        }
        other => (Duration::ZERO, healthy(other)),
    }));

    h.app.fetch_orders();
    h.app.fetch_orders();
    h.settle().await;

    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(h.app.blotter.rows().len(), 1);
    assert_eq!(h.app.blotter.rows()[0].id, "new");
}

#[tokio::test(start_paused = true)]
async fn submitted_order_appears_after_the_refresh() {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    let accepted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&accepted);
    let mut h = Harness::new(ScriptedBackend::new(move |call| match call {
        ApiCall::ListOrders if flag.load(Ordering::SeqCst) => Ok(HttpReply::ok(json!([
            { "orderId": "ord-9", "symbol": "AAPL", "side": "BUY", "qty": 100, "type": "MARKET", "status": "NEW" }
        ]))),
        ApiCall::ListOrders => Ok(HttpReply::ok(json!([]))),
        ApiCall::SubmitOrder(_) => {
            flag.store(true, Ordering::SeqCst);
            Ok(HttpReply::ok(json!({ "orderId": "ord-9" })))
        }
        other => healthy(other),
    }));

    h.mount();
    h.settle().await;
    assert!(h.app.blotter.rows().is_empty());
    assert_eq!(h.app.blotter.empty_hint(), "No orders yet.");

    h.app.ticket.form.symbol = "aapl".into();
    assert!(h.app.submit_order());
    h.settle().await;

    assert!(accepted.load(Ordering::SeqCst));
    assert_eq!(h.app.ticket.result().map(|r| r.message.as_str()), Some("ord-9"));
    let rows = h.app.blotter.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "ord-9");
    assert_eq!(rows[0].status.as_deref(), Some("NEW"));
}
