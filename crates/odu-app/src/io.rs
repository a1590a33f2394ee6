use std::io::BufRead;
use std::thread::JoinHandle;

use kanal::{AsyncSender, Sender};
use odu_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// Turn one line of reader input into an event. Blank lines are skipped.
pub fn parse_input(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(AppEvent::TextInput(line.to_string()));
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    let event = match name {
        "q" | "quit" | "exit" => AppEvent::Shutdown,
        "l" | "lookup" if !rest.is_empty() => AppEvent::LookupWord(rest.to_string()),
        "set" => match rest.split_once(char::is_whitespace) {
            Some((word, meaning)) => AppEvent::SetOverride {
                word: word.to_string(),
                meaning: meaning.trim().to_string(),
            },
            None if !rest.is_empty() => AppEvent::SetOverride {
                word: rest.to_string(),
                meaning: String::new(),
            },
            None => AppEvent::Unrecognized(line.to_string()),
        },
        _ => AppEvent::Unrecognized(line.to_string()),
    };

    Some(event)
}

/// Forward parsed lines from `reader` until end of input, `:quit` or cancellation.
///
/// End of input is reported as `Shutdown` so the event loop can finish.
pub fn watch_lines<R: BufRead>(
    reader: R,
    cancel: &CancellationToken,
    event_tx: &Sender<AppEvent>,
) -> anyhow::Result<()> {
    for line in reader.lines() {
        if cancel.is_cancelled() {
            tracing::info!("Input watcher stopping");
            return Ok(());
        }

        let Some(event) = parse_input(&line?) else {
            continue;
        };
        let shutdown = matches!(event, AppEvent::Shutdown);
        event_tx.send(event)?;
        if shutdown {
            return Ok(());
        }
    }

    tracing::debug!("Input closed");
    event_tx.send(AppEvent::Shutdown)?;
    Ok(())
}

/// Read stdin on a dedicated thread; a pending blocking read must not keep
/// the runtime alive after Ctrl-C.
pub fn spawn_stdin_watcher(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("odu-stdin".to_string())
        .spawn(move || {
            let sender = event_tx.to_sync();
            let stdin = std::io::stdin();
            if let Err(e) = watch_lines(stdin.lock(), &cancel, &sender) {
                tracing::error!("Input watcher error: {}", e);
            }
        })
}
