use crate::input::{spawn_command_reader, ViewerAction};
use tokio::io::BufReader;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Spawn a task that reads commands from stdin and forwards actions to the viewer loop.
pub fn spawn_stdin_commands(tx: UnboundedSender<ViewerAction>) -> JoinHandle<()> {
    spawn_command_reader(BufReader::new(tokio::io::stdin()), tx)
}
