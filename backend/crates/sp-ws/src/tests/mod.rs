
use crate::{ConnectionHandle, ConnectionId};

use axum::extract::ws::Message;
use tokio::sync::mpsc;

/// Handle plus the receiving end of its outbound queue, standing in for a socket writer
pub(crate) fn test_connection(
    tenant_id: &str,
    capacity: usize,
) -> (ConnectionHandle, mpsc::Receiver<Message>) {
    let (tx, rx) = mpsc::channel(capacity);
    (ConnectionHandle::new(ConnectionId::new(), tenant_id, tx), rx)
}

/// Next queued frame as text, if any
pub(crate) fn next_text(rx: &mut mpsc::Receiver<Message>) -> Option<String> {
    match rx.try_recv() {
        Ok(Message::Text(text)) => Some(text.as_str().to_string()),
        Ok(other) => panic!("Expected text frame, got {other:?}"),
        Err(_) => None,
    }
}
