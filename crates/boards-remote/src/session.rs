use tokio::sync::{broadcast, RwLock};

/// Emitted when the session's credentials change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    CredentialsChanged,
}

/// Holds the integration token for the remote service.
///
/// The token can be swapped at runtime without replacing the session
/// object; consumers subscribe and re-fetch when credentials change.
pub struct RemoteSession {
    token: RwLock<String>,
    events: broadcast::Sender<SessionEvent>,
}

impl RemoteSession {
    pub fn new(token: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(8);
        Self {
            token: RwLock::new(token.into()),
            events,
        }
    }

    pub async fn token(&self) -> String {
        self.token.read().await.clone()
    }

    /// Swap the integration token and notify subscribers. A send failure
    /// just means nobody is listening yet.
    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = token.into();
        tracing::info!("remote session credentials changed");
        let _ = self.events.send(SessionEvent::CredentialsChanged);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_token_notifies_subscribers() {
        let session = RemoteSession::new("old");
        let mut events = session.subscribe();

        session.set_token("new").await;
        assert_eq!(session.token().await, "new");
        assert_eq!(events.recv().await.unwrap(), SessionEvent::CredentialsChanged);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_late_subscribers_see_later_swaps() {
        let session = RemoteSession::new("a");
        session.set_token("b").await;

        let mut events = session.subscribe();
        session.set_token("c").await;
        assert_eq!(events.recv().await.unwrap(), SessionEvent::CredentialsChanged);
        assert_eq!(session.token().await, "c");
    }
}
