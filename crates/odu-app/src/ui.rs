use kanal::AsyncReceiver;
use odu_types::AppEvent;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

/// Print rendered output until the event loop signals shutdown
pub async fn output_loop<W>(
    app_to_output_rx: AsyncReceiver<AppEvent>,
    mut writer: W,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    loop {
        let event = tokio::select! {
            event = app_to_output_rx.recv() => event?,
            _ = cancel.cancelled() => {
                tracing::debug!("Output loop cancelled");
                break;
            }
        };

        match event {
            AppEvent::Output(text) => {
                writer.write_all(text.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            AppEvent::Shutdown => break,
            other => tracing::debug!("Output loop ignoring {:?}", other),
        }
    }

    writer.flush().await?;
    Ok(())
}
