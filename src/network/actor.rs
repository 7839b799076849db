//! Network actor - runs entry service calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse, Operation};
use crate::network::client::{create_client, create_entry, fetch_entries};

/// Network actor that turns commands into HTTP calls.
///
/// Every call runs as its own task, so responses come back in completion
/// order, not issue order.
pub struct NetworkActor {
    client: reqwest::Client,
    entries_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: &Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(config.timeout()),
            entries_url: config.entries_url(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchEntries { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let url = self.entries_url.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, "Fetching entries");
                                let response = match fetch_entries(&client, &url).await {
                                    Ok(entries) => NetworkResponse::EntriesFetched { id, entries },
                                    Err(error) => NetworkResponse::Failed {
                                        id,
                                        operation: Operation::Refresh,
                                        error,
                                    },
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::CreateEntry { id, entry }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let url = self.entries_url.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, name = %entry.name, "Creating entry");
                                let response = match create_entry(&client, &url, &entry).await {
                                    Ok(status) => NetworkResponse::EntryCreated { id, status },
                                    Err(error) => NetworkResponse::Failed {
                                        id,
                                        operation: Operation::AddEntry,
                                        error,
                                    },
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Reap finished tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntryError;
    use crate::models::Entry;

    fn config_for(base_url: String) -> Config {
        Config {
            base_url,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_command_yields_entries() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/entries/")
            .with_status(200)
            .with_body(r#"[{"name":"tea","tags":[]}]"#)
            .create_async()
            .await;

        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let actor = NetworkActor::new(&config_for(server.url()), resp_tx);
        let handle = tokio::spawn(actor.run(cmd_rx));

        cmd_tx.send(NetworkCommand::FetchEntries { id: 4 }).unwrap();
        match resp_rx.recv().await.unwrap() {
            NetworkResponse::EntriesFetched { id, entries } => {
                assert_eq!(id, 4);
                assert_eq!(entries, vec![Entry::new("tea", vec![])]);
            }
            other => panic!("unexpected response {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_create_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("POST", "/entries/").with_status(503).create_async().await;

        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        tokio::spawn(NetworkActor::new(&config_for(server.url()), resp_tx).run(cmd_rx));

        cmd_tx
            .send(NetworkCommand::CreateEntry { id: 9, entry: Entry::default() })
            .unwrap();
        match resp_rx.recv().await.unwrap() {
            NetworkResponse::Failed { id, operation, error } => {
                assert_eq!(id, 9);
                assert_eq!(operation, Operation::AddEntry);
                assert_eq!(error, EntryError::Server { status: 503 });
            }
            other => panic!("unexpected response {:?}", other),
        }
    }
}
