//! Writing sequences to a sink
//!
//! The whole sequence is encoded before anything is written and then sent
//! with a single `write_all`, so the terminal parser never sees a sequence
//! we started but chose not to finish. Suppressed sequences write nothing.

use std::io::Write;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::error::Osc52Error;
use crate::sequence::{EncodedSequence, TextEncoder};

/// Write `sequence` to `sink` and flush
///
/// # Returns
/// * `Ok(n)` - number of bytes written, 0 for a suppressed sequence
/// * `Err(Osc52Error::Io)` - the sink failed
pub fn write<W: Write + ?Sized>(
    sequence: &EncodedSequence,
    encoder: &dyn TextEncoder,
    sink: &mut W,
) -> Result<usize, Osc52Error> {
    if sequence.is_suppressed() {
        #[cfg(debug_assertions)]
        log::debug!("Nothing to write, sequence suppressed");
        return Ok(0);
    }

    let bytes = sequence.to_bytes(encoder);
    sink.write_all(&bytes)?;
    sink.flush()?;

    #[cfg(debug_assertions)]
    log::debug!("Wrote {} byte OSC 52 sequence", bytes.len());

    Ok(bytes.len())
}

/// Write `sequence` to `sink` and flush, racing against `cancel_token`
///
/// A token that is already cancelled writes nothing. Cancellation while
/// the write is in flight drops the write future; whatever reached the
/// sink by then is the caller's to deal with.
///
/// # Returns
/// * `Ok(n)` - number of bytes written, 0 for a suppressed sequence
/// * `Err(Osc52Error::Cancelled)` - the token fired first
/// * `Err(Osc52Error::Io)` - the sink failed
pub async fn write_async<W: AsyncWrite + Unpin + ?Sized>(
    sequence: &EncodedSequence,
    encoder: &dyn TextEncoder,
    sink: &mut W,
    cancel_token: CancellationToken,
) -> Result<usize, Osc52Error> {
    if cancel_token.is_cancelled() {
        return Err(Osc52Error::Cancelled);
    }

    if sequence.is_suppressed() {
        #[cfg(debug_assertions)]
        log::debug!("Nothing to write, sequence suppressed");
        return Ok(0);
    }

    let bytes = sequence.to_bytes(encoder);

    tokio::select! {
        biased;

        _ = cancel_token.cancelled() => {
            log::debug!("OSC 52 write cancelled");
            Err(Osc52Error::Cancelled)
        }

        result = write_and_flush(sink, &bytes) => {
            result?;

            #[cfg(debug_assertions)]
            log::debug!("Wrote {} byte OSC 52 sequence", bytes.len());

            Ok(bytes.len())
        }
    }
}

async fn write_and_flush<W: AsyncWrite + Unpin + ?Sized>(
    sink: &mut W,
    bytes: &[u8],
) -> std::io::Result<()> {
    sink.write_all(bytes).await?;
    sink.flush().await
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod output_tests;
