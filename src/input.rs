//! Command input.
//!
//! Commands arrive as text lines (typically stdin) and are translated into domain-level
//! [`ViewerAction`]s that the viewer loop consumes.

use futures::StreamExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::LinesStream;

/// High-level actions emitted by the command parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Jump to a page; out-of-range values are clamped by the navigator
    GoToPage(i64),
    /// Change the width of the area pages are fitted into
    Resize { width: u32 },
    Refresh,
    Status,
    Quit,
    NoAction,
    InvalidInput(String),
}

/// Parse one command line.
///
/// Grammar (case-insensitive): `next`/`n`, `prev`/`p`, `first`, `last`, `goto N` or a bare
/// `N`, `width PX`, `refresh`, `status`, `quit`/`q`. Blank lines produce `NoAction`.
pub fn parse_command(line: &str) -> ViewerAction {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return ViewerAction::NoAction;
    };
    let argument = words.next();
    if words.next().is_some() {
        return ViewerAction::InvalidInput(line.trim().to_string());
    }

    let command = command.to_ascii_lowercase();
    match (command.as_str(), argument) {
        ("next" | "n", None) => ViewerAction::NextPage,
        ("prev" | "previous" | "p", None) => ViewerAction::PreviousPage,
        ("first", None) => ViewerAction::FirstPage,
        ("last", None) => ViewerAction::LastPage,
        ("refresh", None) => ViewerAction::Refresh,
        ("status", None) => ViewerAction::Status,
        ("quit" | "q", None) => ViewerAction::Quit,
        ("goto" | "g", Some(page)) => match page.parse::<i64>() {
            Ok(page) => ViewerAction::GoToPage(page),
            Err(_) => ViewerAction::InvalidInput(line.trim().to_string()),
        },
        ("width" | "w", Some(width)) => match width.parse::<u32>() {
            Ok(width) if width > 0 => ViewerAction::Resize { width },
            _ => ViewerAction::InvalidInput(line.trim().to_string()),
        },
        (page, None) => match page.parse::<i64>() {
            Ok(page) => ViewerAction::GoToPage(page),
            Err(_) => ViewerAction::InvalidInput(line.trim().to_string()),
        },
        _ => ViewerAction::InvalidInput(line.trim().to_string()),
    }
}

/// Spawn a task that reads command lines from `reader` and forwards actions onto a channel.
///
/// The task ends at end of input, on a read error, or once the receiver is gone. Blank lines
/// are skipped.
pub fn spawn_command_reader<R>(reader: R, tx: UnboundedSender<ViewerAction>) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = LinesStream::new(reader.lines());
        while let Some(line) = lines.next().await {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    log::error!("command input error: {err}");
                    break;
                }
            };

            let action = parse_command(&line);
            if action == ViewerAction::NoAction {
                continue;
            }
            if tx.send(action).is_err() {
                break;
            }
        }
    })
}
