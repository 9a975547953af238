use common::log;
use tokio::sync::mpsc;
use crate::state::ClientCommand;

#[derive(Clone)]
pub struct CommandSender(mpsc::UnboundedSender<ClientCommand>);

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self(tx)
    }

    pub fn send(&self, cmd: ClientCommand) {
        if self.0.send(cmd).is_err() {
            log!("Game task is gone, dropping {:?}", cmd);
        }
    }
}
