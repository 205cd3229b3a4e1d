use log::{debug, warn};

use super::availability::{AvailabilityOutcome, AvailabilityRequest, DateRange, RoomId};
use super::client::AvailabilityClient;
use crate::utils::notify::{ModalNotice, NoticeLink, Notifier, Severity};

pub const UNAVAILABLE_MESSAGE: &str = "No availability";
pub const FAILURE_TITLE: &str = "Something went wrong";

/// Runs one availability check for a room and reports the outcome through
/// the notifier. Concurrent checks are independent of each other.
pub struct AvailabilityChecker<C, N> {
    room_id: RoomId,
    csrf_token: String,
    booking_path: String,
    client: C,
    notifier: N,
}

impl<C: AvailabilityClient, N: Notifier> AvailabilityChecker<C, N> {
    pub fn new(
        room_id: impl Into<RoomId>,
        csrf_token: impl Into<String>,
        booking_path: impl Into<String>,
        client: C,
        notifier: N,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            csrf_token: csrf_token.into(),
            booking_path: booking_path.into(),
            client,
            notifier,
        }
    }

    pub fn request_for(&self, range: &DateRange) -> AvailabilityRequest {
        AvailabilityRequest::new(range, &self.csrf_token, &self.room_id)
    }

    pub async fn check(&self, range: &DateRange) -> AvailabilityOutcome {
        let request = self.request_for(range);
        debug!(
            "checking room {} from {} to {}",
            request.room_id, request.start, request.end
        );

        let result = self.client.search(&request).await;
        let outcome = AvailabilityOutcome::from_result(result, &self.booking_path);
        self.render(&outcome);
        outcome
    }

    pub fn render(&self, outcome: &AvailabilityOutcome) {
        match outcome {
            AvailabilityOutcome::Available { booking_url } => {
                self.notifier.notify_modal(ModalNotice {
                    title: "Room available".to_string(),
                    text: String::new(),
                    icon: Severity::Success,
                    confirm_label: None,
                    link: Some(NoticeLink {
                        href: booking_url.clone(),
                        label: "Book now!".to_string(),
                    }),
                });
            }
            AvailabilityOutcome::Unavailable { message } => {
                let text = match message {
                    Some(message) => {
                        warn!("room {} not available: {}", self.room_id, message);
                        format!("{}: {}", UNAVAILABLE_MESSAGE, message)
                    }
                    None => UNAVAILABLE_MESSAGE.to_string(),
                };
                self.notifier.notify(&text, Severity::Error);
            }
            AvailabilityOutcome::Failed { reason } => {
                warn!("availability check for room {} failed: {}", self.room_id, reason);
                self.notifier.notify_modal(ModalNotice::new(
                    FAILURE_TITLE,
                    "We could not check availability. Please try again.",
                    Severity::Error,
                    "OK",
                ));
            }
        }
    }
}
