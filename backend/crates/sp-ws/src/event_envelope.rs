use crate::{EventKind, Result as WsErrorResult};

use axum::extract::ws::Utf8Bytes;
use serde::Serialize;

/// Wire envelope: `{"event": <kind>, "data": <payload>}`
#[derive(Serialize)]
pub struct EventEnvelope<'a, T: ?Sized> {
    pub event: EventKind,
    pub data: &'a T,
}

impl<'a, T> EventEnvelope<'a, T>
where
    T: Serialize + ?Sized,
{
    pub fn new(event: EventKind, data: &'a T) -> Self {
        Self { event, data }
    }

    /// Serialize once; the returned text is shared by every recipient
    pub fn encode(&self) -> WsErrorResult<Utf8Bytes> {
        let text = serde_json::to_string(self)?;
        Ok(Utf8Bytes::from(text))
    }
}
