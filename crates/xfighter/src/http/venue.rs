/*
[INPUT]:  Venue identifier
[OUTPUT]: Up/down answer for the API and for individual venues
[POS]:    HTTP layer - heartbeat endpoints (no auth required)
[UPDATE]: When heartbeat endpoints or their error answers change
*/

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::http::decode::{EXPECT_OK, decode_response};
use crate::http::{Result, XfighterClient, XfighterError};
use crate::types::{HeartbeatResponse, VenueHeartbeatResponse};

/// Statuses the service answers with when a venue is unknown or down,
/// whatever body comes with them
const DOWN_STATUSES: &[StatusCode] = &[StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR];

impl XfighterClient {
    /// Check whether the API itself is up
    ///
    /// GET /heartbeat
    pub async fn heartbeat(&self) -> Result<bool> {
        let answer = self.check_heartbeat::<HeartbeatResponse>(&["heartbeat"], "api").await?;
        Ok(answer.is_some_and(|body| body.ok))
    }

    /// Check whether a venue is up
    ///
    /// GET /venues/{venue}/heartbeat
    pub async fn venue_heartbeat(&self, venue: &str) -> Result<bool> {
        let answer = self
            .check_heartbeat::<VenueHeartbeatResponse>(&["venues", venue, "heartbeat"], venue)
            .await?;
        Ok(answer.is_some_and(|body| body.ok))
    }

    /// `None` means the service reported the target down: a 404/500 status or
    /// an `ok: false` body. Transport failures and any other unexpected
    /// response still reach the caller.
    async fn check_heartbeat<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        target: &str,
    ) -> Result<Option<T>> {
        let builder = self.request_builder(Method::GET, segments, &[])?;
        let raw = self.send_raw(builder).await?;
        if DOWN_STATUSES.contains(&raw.status) {
            warn!(target_name = target, status = %raw.status, "heartbeat reports down");
            return Ok(None);
        }
        match decode_response(&raw, EXPECT_OK) {
            Ok(body) => Ok(Some(body)),
            Err(XfighterError::Request { status, message }) => {
                warn!(target_name = target, %status, %message, "heartbeat reports down");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
