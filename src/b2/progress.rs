// B2 Rust Library for Backblaze B2 Cloud Storage
// Copyright 2026 The b2-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Transfer progress reporting for uploads and downloads.
//!
//! A [`ProgressSink`] can be attached to `upload_file`, `upload_part` and
//! both download builders. It is invoked from the transport as bytes are
//! handed to (or read from) the connection; it never affects the result
//! value of the call.

use bytes::Bytes;
use futures_util::{Stream, StreamExt, TryStreamExt};
use reqwest::Body;
use std::fmt;
use std::sync::Arc;

/// Upload payloads are fed to the transport in slices of this size so
/// progress is reported at a useful granularity.
pub const PROGRESS_CHUNK_SIZE: usize = 64 * 1024;

/// A single progress notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Bytes transferred so far.
    pub transferred: u64,
    /// Total bytes expected, when known.
    pub total: Option<u64>,
}

/// Receiver of progress notifications.
pub trait ProgressHandler: Send + Sync {
    fn on_progress(&self, event: ProgressEvent);
}

impl<F> ProgressHandler for F
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    fn on_progress(&self, event: ProgressEvent) {
        self(event)
    }
}

/// Cloneable, type-erased [`ProgressHandler`].
#[derive(Clone)]
pub struct ProgressSink(Arc<dyn ProgressHandler>);

impl ProgressSink {
    pub fn new<H: ProgressHandler + 'static>(handler: H) -> Self {
        Self(Arc::new(handler))
    }

    pub(crate) fn notify(&self, transferred: u64, total: Option<u64>) {
        self.0.on_progress(ProgressEvent { transferred, total });
    }
}

impl fmt::Debug for ProgressSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProgressSink")
    }
}

/// Builds the request body for an upload, reporting progress per chunk
/// when a sink is present.
pub(crate) fn upload_body(data: Bytes, progress: Option<ProgressSink>) -> Body {
    let Some(sink) = progress else {
        return Body::from(data);
    };

    let total = data.len() as u64;
    let mut chunks = Vec::with_capacity(data.len() / PROGRESS_CHUNK_SIZE + 1);
    let mut offset = 0;
    while offset < data.len() {
        let end = usize::min(offset + PROGRESS_CHUNK_SIZE, data.len());
        chunks.push(data.slice(offset..end));
        offset = end;
    }

    let mut sent = 0_u64;
    let stream = futures_util::stream::iter(chunks).map(move |chunk| {
        sent += chunk.len() as u64;
        sink.notify(sent, Some(total));
        Ok::<_, std::io::Error>(chunk)
    });
    Body::wrap_stream(stream)
}

/// Wraps a download byte stream so every received chunk is reported.
pub(crate) fn track_download<S>(
    stream: S,
    progress: Option<ProgressSink>,
    total: Option<u64>,
) -> impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
{
    let mut received = 0_u64;
    stream.inspect_ok(move |chunk| {
        received += chunk.len() as u64;
        if let Some(sink) = &progress {
            sink.notify(received, total);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_download_tracking_reports_running_total() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let events = events.clone();
            ProgressSink::new(move |e: ProgressEvent| events.lock().unwrap().push(e))
        };

        let chunks: Vec<Result<Bytes, reqwest::Error>> = vec![
            Ok(Bytes::from_static(b"abc")),
            Ok(Bytes::from_static(b"de")),
        ];
        let tracked = track_download(futures_util::stream::iter(chunks), Some(sink), Some(5));
        let collected: Vec<Bytes> = tracked.try_collect().await.unwrap();

        assert_eq!(collected.len(), 2);
        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                ProgressEvent { transferred: 3, total: Some(5) },
                ProgressEvent { transferred: 5, total: Some(5) },
            ]
        );
    }
}
