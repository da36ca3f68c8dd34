use crate::convert::job::{ConversionJob, ConversionRequest, ExportOptions};
use crate::foundation::error::{FramepressError, FramepressResult};
use std::sync::mpsc;
use std::thread;

/// Render and encode one frame on the calling thread.
///
/// Blocking twin of [`export_frame`]; both share the same validation and the
/// same pipeline, so behavior can never drift between the two entry points.
pub fn export_frame_sync(
    document: Vec<u8>,
    options: &ExportOptions,
) -> FramepressResult<Vec<u8>> {
    let request = ConversionRequest::new(document, options)?;
    ConversionJob::new(request).run()
}

/// Render and encode one frame on a dedicated worker thread.
///
/// Option validation still happens on the calling thread, so malformed
/// options fail fast; everything after that, including load failures, is
/// delivered through the returned [`PendingExport`]. Ownership of the
/// document bytes and all intermediate buffers moves into the worker and
/// comes back exactly once as the terminal result.
pub fn export_frame(
    document: Vec<u8>,
    options: &ExportOptions,
) -> FramepressResult<PendingExport> {
    let request = ConversionRequest::new(document, options)?;
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        // A dropped handle closes the channel; the send result is irrelevant.
        let _ = tx.send(ConversionJob::new(request).run());
    });
    Ok(PendingExport { rx, handle })
}

/// Handle to an in-flight export job.
///
/// Resolves exactly once, with either the encoded PNG bytes or the job's
/// terminal error. There is no cancellation: a started job always runs to a
/// terminal state.
#[derive(Debug)]
pub struct PendingExport {
    rx: mpsc::Receiver<FramepressResult<Vec<u8>>>,
    handle: thread::JoinHandle<()>,
}

impl PendingExport {
    /// Return `true` once the worker has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the job completes and take its terminal result.
    pub fn wait(self) -> FramepressResult<Vec<u8>> {
        let received = self.rx.recv().ok();
        let joined = self.handle.join();
        match received {
            Some(result) => result,
            None => Err(FramepressError::Other(anyhow::anyhow!(
                if joined.is_err() {
                    "export worker thread panicked"
                } else {
                    "export worker finished without delivering a result"
                }
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/export.rs"]
mod tests;
