//! Store actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::{EntryStore, Outcome};
use crate::config::Config;
use crate::error::EntryError;
use crate::messages::{NetworkCommand, NetworkResponse, Operation, RenderState, UiEvent};

/// Store actor - sole owner of the `EntryStore`.
///
/// Publishes a `RenderState` snapshot on `render_tx` after every change; that
/// channel is how the UI observes the store.
pub struct StoreActor {
    store: EntryStore,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl StoreActor {
    pub fn new(
        config: &Config,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        let mut store = EntryStore::new();
        store.entries_url = config.entries_url();
        if let Some(notice) = &config.startup_notice {
            store.show_notice(notice.clone());
        }

        StoreActor {
            store,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop. Issues the initial refresh before
    /// processing any event.
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        let cmd = self.store.refresh();
        self.dispatch(cmd);
        self.publish();

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        self.dispatch(NetworkCommand::Shutdown);
                        break;
                    }
                    self.publish();
                }
                Some(response) = net_rx.recv() => {
                    self.apply(response);
                    self.publish();
                }
                else => break,
            }
        }
    }

    /// Hand a command to the network layer. If that layer is gone the
    /// operation fails here instead of staying pending forever.
    fn dispatch(&mut self, cmd: NetworkCommand) {
        let (id, operation) = match &cmd {
            NetworkCommand::FetchEntries { id } => (*id, Operation::Refresh),
            NetworkCommand::CreateEntry { id, .. } => (*id, Operation::AddEntry),
            NetworkCommand::Shutdown => {
                let _ = self.network_tx.send(cmd);
                return;
            }
        };

        if self.network_tx.send(cmd).is_err() {
            self.apply(NetworkResponse::Failed {
                id,
                operation,
                error: EntryError::transport("network layer stopped"),
            });
        }
    }

    fn publish(&self) {
        let _ = self.render_tx.send(self.store.snapshot());
    }

    fn apply(&mut self, response: NetworkResponse) {
        let id = response.id();
        match self.store.handle_response(response) {
            Outcome::Refreshed { count } => tracing::info!(id, count, "Entries refreshed"),
            Outcome::Created => tracing::info!(id, "Entry created"),
            Outcome::Stale { id } => tracing::debug!(id, "Dropped stale refresh"),
            Outcome::Failed(failure) => tracing::warn!(
                id,
                operation = %failure.operation,
                error = %failure.error,
                "Operation failed"
            ),
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Refresh => {
                let cmd = self.store.refresh();
                self.dispatch(cmd);
            }
            UiEvent::AddEntry => {
                let cmd = self.store.add_entry();
                self.dispatch(cmd);
            }

            UiEvent::NextField => self.store.focus_next_field(),
            UiEvent::PrevField => self.store.focus_prev_field(),
            UiEvent::StartEditing => self.store.start_editing(),
            UiEvent::StopEditing => self.store.stop_editing(),
            UiEvent::CharInput(c) => self.store.enter_char(c),
            UiEvent::Backspace => self.store.delete_char(),

            UiEvent::DismissNotice => self.store.dismiss_notice(),

            UiEvent::Quit => return true,
        }

        false
    }
}
