use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use httpmock::prelude::*;
use room_availability::data::availability::{AvailabilityOutcome, DateRange};
use room_availability::data::checker::AvailabilityChecker;
use room_availability::data::client::ReqwestAvailabilityClient;
use room_availability::utils::notify::{ModalNotice, Notifier, Severity};

#[derive(Clone, Default)]
struct Recorded {
    toasts: Rc<RefCell<Vec<(String, Severity)>>>,
    dialogs: Rc<RefCell<Vec<ModalNotice>>>,
}

impl Notifier for Recorded {
    fn notify(&self, message: &str, severity: Severity) {
        self.toasts.borrow_mut().push((message.to_string(), severity));
    }

    fn notify_modal(&self, notice: ModalNotice) {
        self.dialogs.borrow_mut().push(notice);
    }
}

fn june_stay() -> DateRange {
    let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    DateRange::from_form("2024-06-01", "2024-06-03", today).unwrap()
}

fn checker_for(
    server: &MockServer,
    notifier: Recorded,
) -> AvailabilityChecker<ReqwestAvailabilityClient, Recorded> {
    let client = ReqwestAvailabilityClient::new(&server.base_url(), "/search-availability-json");
    AvailabilityChecker::new("3", "abc123", "/book-room", client, notifier)
}

#[tokio::test]
async fn test_available_room_posts_form_and_links_to_booking() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/search-availability-json")
            .header("content-type", "application/x-www-form-urlencoded")
            .body("start=2024-06-01&end=2024-06-03&csrf_token=abc123&room_id=3");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "ok": true,
                "room_id": "3",
                "start_date": "2024-06-01",
                "end_date": "2024-06-03"
            }));
    });

    let notifier = Recorded::default();
    let outcome = checker_for(&server, notifier.clone()).check(&june_stay()).await;

    api_mock.assert();
    assert_eq!(
        outcome,
        AvailabilityOutcome::Available {
            booking_url: "/book-room?id=3&s=2024-06-01&e=2024-06-03".to_string()
        }
    );

    let dialogs = notifier.dialogs.borrow();
    assert_eq!(dialogs.len(), 1);
    assert_eq!(
        dialogs[0].link.as_ref().map(|link| link.href.as_str()),
        Some("/book-room?id=3&s=2024-06-01&e=2024-06-03")
    );
    assert!(notifier.toasts.borrow().is_empty());
}

#[tokio::test]
async fn test_link_uses_values_echoed_by_server() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/search-availability-json");
        then.status(200).json_body(serde_json::json!({
            "ok": true,
            "room_id": 3,
            "start_date": "2024-06-02",
            "end_date": "2024-06-04"
        }));
    });

    let outcome = checker_for(&server, Recorded::default()).check(&june_stay()).await;

    assert_eq!(
        outcome,
        AvailabilityOutcome::Available {
            booking_url: "/book-room?id=3&s=2024-06-02&e=2024-06-04".to_string()
        }
    );
}

#[tokio::test]
async fn test_unavailable_room_shows_error_only() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/search-availability-json");
        then.status(200).json_body(serde_json::json!({
            "ok": false,
            "room_id": "3",
            "start_date": "2024-06-01",
            "end_date": "2024-06-03"
        }));
    });

    let notifier = Recorded::default();
    checker_for(&server, notifier.clone()).check(&june_stay()).await;

    assert_eq!(
        *notifier.toasts.borrow(),
        vec![("No availability".to_string(), Severity::Error)]
    );
    assert!(notifier.dialogs.borrow().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_reported_as_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/search-availability-json");
        then.status(200).body("<html>oops</html>");
    });

    let notifier = Recorded::default();
    let outcome = checker_for(&server, notifier.clone()).check(&june_stay()).await;

    assert!(matches!(outcome, AvailabilityOutcome::Failed { .. }));
    let dialogs = notifier.dialogs.borrow();
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].title, "Something went wrong");
    assert_eq!(dialogs[0].icon, Severity::Error);
}

#[tokio::test]
async fn test_server_error_status_is_reported_as_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/search-availability-json");
        then.status(503);
    });

    let outcome = checker_for(&server, Recorded::default()).check(&june_stay()).await;

    assert_eq!(
        outcome,
        AvailabilityOutcome::Failed {
            reason: "Server responded with status 503".to_string()
        }
    );
}
