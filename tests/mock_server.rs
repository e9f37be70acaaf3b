use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use board::{
    BoardConfig, ParkRequest, SlotRecord, SlotStatus, Snapshot, StatusUpdate, TargetStatus,
};
use park_board::cli::Command;
use park_board::client::BoardClient;
use park_board::commands::{self, ParkArgs, StatusArgs};
use park_board::logging;
use park_board::watch::{self, WatchArgs};
use tokio::task::JoinHandle;

#[derive(Default)]
struct MockLot {
    slots: Vec<SlotRecord>,
    fetches: usize,
    fail_first: usize,
    change_on_fetch: Option<(usize, String, SlotStatus)>,
    garbage: bool,
    park_calls: usize,
    status_calls: usize,
}

type SharedLot = Arc<Mutex<MockLot>>;

async fn full_status(State(lot): State<SharedLot>) -> Response {
    let mut lot = lot.lock().expect("lot lock");
    lot.fetches += 1;

    if lot.fetches <= lot.fail_first {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if lot.garbage {
        return "<html>maintenance</html>".into_response();
    }
    if let Some((at, id, status)) = lot.change_on_fetch.clone() {
        if lot.fetches == at {
            if let Some(slot) = lot.slots.iter_mut().find(|slot| slot.id == id) {
                slot.status = status;
            }
        }
    }

    Json(Snapshot::new(lot.slots.clone())).into_response()
}

async fn update_status(
    State(lot): State<SharedLot>,
    Json(update): Json<StatusUpdate>,
) -> StatusCode {
    let mut lot = lot.lock().expect("lot lock");
    lot.status_calls += 1;
    match lot.slots.iter_mut().find(|slot| slot.id == update.slot_id) {
        Some(slot) => {
            slot.status = update.status.into();
            slot.plate = None;
            slot.model = None;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn park(State(lot): State<SharedLot>, Json(request): Json<ParkRequest>) -> StatusCode {
    let mut lot = lot.lock().expect("lot lock");
    lot.park_calls += 1;
    match lot
        .slots
        .iter_mut()
        .find(|slot| slot.id == request.slot && slot.status.is_available())
    {
        Some(slot) => {
            *slot = SlotRecord::occupied(slot.id.clone(), request.plate, request.model);
            StatusCode::OK
        }
        None => StatusCode::CONFLICT,
    }
}

async fn start_mock(lot: MockLot) -> (BoardClient, SharedLot, JoinHandle<()>) {
    logging::set_silent(true);

    let shared: SharedLot = Arc::new(Mutex::new(lot));
    let app = Router::new()
        .route("/full_status", get(full_status))
        .route("/update_status", post(update_status))
        .route("/park", post(park))
        .with_state(Arc::clone(&shared));

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock address");
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let client = BoardClient::new(BoardConfig {
        base_url: format!("http://{addr}"),
        ..BoardConfig::default()
    })
    .expect("client");
    (client, shared, handle)
}

fn two_slot_lot() -> MockLot {
    MockLot {
        slots: vec![
            SlotRecord::new("A1", SlotStatus::Available),
            SlotRecord::occupied("A2", "XYZ-123", "Sedan"),
        ],
        ..MockLot::default()
    }
}

fn fast_watch(limit: usize) -> WatchArgs {
    WatchArgs {
        interval_ms: 10,
        limit: Some(limit),
    }
}

#[tokio::test]
async fn watch_prints_only_when_the_board_changes() {
    let (client, lot, handle) = start_mock(MockLot {
        change_on_fetch: Some((3, "A1".into(), SlotStatus::Reserved)),
        ..two_slot_lot()
    })
    .await;

    let mut out = Vec::new();
    let summary = watch::run_with_output(&client, fast_watch(2), &mut out)
        .await
        .expect("watch");

    assert_eq!(summary.polls, 3, "second poll was unchanged");
    assert_eq!(summary.renders, 2);
    assert_eq!(summary.failures, 0);
    assert_eq!(lot.lock().expect("lot lock").fetches, 3);

    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.matches("SLOT").count(), 2, "board printed twice");
    assert!(text.contains("available: 1 | occupied: 1 | free slots: A1"));
    assert!(text.contains("available: 0 | occupied: 1 | free slots: -"));
    handle.abort();
}

#[tokio::test]
async fn watch_survives_failed_fetches() {
    let (client, _lot, handle) = start_mock(MockLot {
        fail_first: 2,
        ..two_slot_lot()
    })
    .await;

    let mut out = Vec::new();
    let summary = watch::run_with_output(&client, fast_watch(1), &mut out)
        .await
        .expect("watch keeps going after server errors");

    assert_eq!(summary.failures, 2);
    assert_eq!(summary.renders, 1);
    assert_eq!(summary.polls, 3);
    handle.abort();
}

#[tokio::test]
async fn undecodable_snapshot_is_a_soft_failure() {
    let (client, _lot, handle) = start_mock(MockLot {
        garbage: true,
        ..two_slot_lot()
    })
    .await;

    let mut sync = board::BoardSync::new();
    let result = watch::poll_once(&client, &mut sync).await;
    assert!(matches!(result, Err(board::BoardError::Decode(_))));
    assert!(sync.snapshot().is_empty());
    handle.abort();
}

#[tokio::test]
async fn set_status_updates_then_prints_board() {
    let (client, lot, handle) = start_mock(two_slot_lot()).await;

    let mut out = Vec::new();
    commands::set_status(
        &client,
        StatusArgs {
            slot: "A1".into(),
            status: TargetStatus::Reserved,
        },
        &mut out,
    )
    .await
    .expect("set status");

    assert_eq!(lot.lock().expect("lot lock").status_calls, 1);
    let text = String::from_utf8(out).expect("utf8");
    let a1 = text
        .lines()
        .find(|line| line.starts_with("A1"))
        .expect("A1 row");
    assert!(a1.contains("RESERVED"));
    assert!(a1.ends_with("[reserved]"));
    handle.abort();
}

#[tokio::test]
async fn park_without_slot_sends_nothing() {
    let (client, lot, handle) = start_mock(two_slot_lot()).await;

    let mut out = Vec::new();
    let err = commands::park(
        &client,
        ParkArgs {
            slot: None,
            plate: "XYZ-999".into(),
            model: "Coupe".into(),
        },
        &mut out,
    )
    .await
    .expect_err("validation error");

    assert_eq!(err.to_string(), "Please select a slot!");
    let lot = lot.lock().expect("lot lock");
    assert_eq!(lot.park_calls, 0);
    assert_eq!(lot.fetches, 0);
    handle.abort();
}

#[tokio::test]
async fn park_success_reports_and_refreshes() {
    let (client, lot, handle) = start_mock(two_slot_lot()).await;

    let mut out = Vec::new();
    commands::park(
        &client,
        ParkArgs {
            slot: Some("A1".into()),
            plate: "NEW-42".into(),
            model: "Hatchback".into(),
        },
        &mut out,
    )
    .await
    .expect("park");

    assert_eq!(lot.lock().expect("lot lock").park_calls, 1);
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.starts_with("Vehicle NEW-42 parked successfully!"));
    assert!(text.contains("available: 0 | occupied: 2 | free slots: -"));
    handle.abort();
}

#[tokio::test]
async fn rejected_park_surfaces_an_error() {
    let (client, _lot, handle) = start_mock(two_slot_lot()).await;

    let mut out = Vec::new();
    let err = commands::park(
        &client,
        ParkArgs {
            slot: Some("A2".into()),
            plate: "NEW-42".into(),
            model: String::new(),
        },
        &mut out,
    )
    .await
    .expect_err("occupied slot");

    assert_eq!(err.to_string(), "Error parking vehicle");
    assert!(out.is_empty(), "nothing printed on failure");
    handle.abort();
}

#[test]
fn default_command_watches_with_standard_cadence() {
    match Command::default() {
        Command::Watch(args) => assert_eq!(args.interval_ms, 2_000),
        other => panic!("unexpected default {other:?}"),
    }
}
