use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio_util::sync::CancellationToken;

use crate::events::AppEvent;

/// Forward each input line to the app as a form submission
pub async fn input_io<R>(
    reader: R,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
{
    let result = read_lines(reader, &event_tx, &cancel).await;

    // The event loop drains pending lookups once this arrives
    if let Err(e) = event_tx.send(AppEvent::InputClosed).await {
        tracing::debug!("Event loop already gone: {e}");
    }

    result
}

async fn read_lines<R>(
    reader: R,
    event_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => event_tx.send(AppEvent::Submit(line)).await?,
                None => break,
            },
            _ = cancel.cancelled() => {
                tracing::info!("Input reader stopping");
                break;
            }
        }
    }

    Ok(())
}
