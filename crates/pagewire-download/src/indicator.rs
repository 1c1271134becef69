//! Busy indicator for download controls

use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use pagewire_dom::{NodeId, SharedDocument};

use crate::error::DownloadError;
use crate::Result;

pub const DEFAULT_BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> 下载中..."#;
pub const DEFAULT_BUSY_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorOptions {
    /// Label shown while busy
    pub busy_label: String,
    /// How long the busy label stays after the latest click
    pub busy_duration: Duration,
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            busy_label: DEFAULT_BUSY_LABEL.to_string(),
            busy_duration: DEFAULT_BUSY_DURATION,
        }
    }
}

struct PendingRevert {
    /// Label the control had before it became busy
    original: String,
    /// Identifies the task allowed to perform this revert
    generation: u64,
    handle: JoinHandle<()>,
}

/// Swaps control labels to a busy variant and schedules their restore.
///
/// Lock order is always `pending` before the document.
#[derive(Clone)]
pub struct BusyIndicator {
    document: SharedDocument,
    options: IndicatorOptions,
    pending: Arc<Mutex<HashMap<NodeId, PendingRevert>>>,
    generation: Arc<AtomicU64>,
}

impl BusyIndicator {
    pub fn new(document: SharedDocument, options: IndicatorOptions) -> Self {
        Self {
            document,
            options,
            pending: Arc::new(Mutex::new(HashMap::new())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn options(&self) -> &IndicatorOptions {
        &self.options
    }

    /// Show the busy label on `node` and (re)schedule the restore.
    ///
    /// Must be called from within a tokio runtime. A pending restore for the
    /// same control is aborted; the label remembered from before the first
    /// click is the one that comes back.
    pub fn trigger(&self, node: NodeId) -> Result<()> {
        let runtime = Handle::try_current().map_err(|_| DownloadError::NoRuntime)?;

        let mut pending = self.pending.lock();
        let original = match pending.remove(&node) {
            Some(previous) => {
                previous.handle.abort();
                tracing::debug!(node = %node, "Restarted busy interval");
                previous.original
            }
            None => self.document.read().element(node)?.inner_html().to_string(),
        };

        self.document
            .write()
            .set_inner_html(node, self.options.busy_label.clone())?;

        let generation = self.generation.fetch_add(1, Ordering::Relaxed);
        let delay = self.options.busy_duration;
        let document = Arc::clone(&self.document);
        let pending_reverts = Arc::clone(&self.pending);

        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            let mut pending = pending_reverts.lock();
            if let Entry::Occupied(entry) = pending.entry(node) {
                // A newer click owns the revert now
                if entry.get().generation != generation {
                    return;
                }
                let revert = entry.remove();
                match document.write().set_inner_html(node, revert.original) {
                    Ok(_) => tracing::debug!(node = %node, "Restored control label"),
                    Err(e) => tracing::warn!(node = %node, error = %e, "Failed to restore label"),
                }
            }
        });

        pending.insert(
            node,
            PendingRevert {
                original,
                generation,
                handle,
            },
        );

        Ok(())
    }

    pub fn is_busy(&self, node: NodeId) -> bool {
        self.pending.lock().contains_key(&node)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }

    /// Restore `node` immediately. Returns false if it was not busy.
    pub fn cancel(&self, node: NodeId) -> Result<bool> {
        let Some(revert) = self.pending.lock().remove(&node) else {
            return Ok(false);
        };
        revert.handle.abort();
        self.document.write().set_inner_html(node, revert.original)?;
        Ok(true)
    }

    /// Restore every busy control immediately.
    pub fn cancel_all(&self) {
        let mut pending = self.pending.lock();
        let mut document = self.document.write();

        for (node, revert) in pending.drain() {
            revert.handle.abort();
            if let Err(e) = document.set_inner_html(node, revert.original) {
                tracing::warn!(node = %node, error = %e, "Failed to restore label");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewire_dom::Document;

    const ORIGINAL: &str = r#"<i class="fas fa-download"></i> 下载"#;

    fn setup() -> (SharedDocument, NodeId, BusyIndicator) {
        let doc = Document::parse(&format!(
            r#"<button class="download-btn">{}</button>"#,
            ORIGINAL
        ))
        .unwrap();
        let button = doc.elements_with_class("download-btn")[0];
        let shared = doc.into_shared();
        let indicator = BusyIndicator::new(shared.clone(), IndicatorOptions::default());
        (shared, button, indicator)
    }

    fn label(doc: &SharedDocument, node: NodeId) -> String {
        doc.read().element(node).unwrap().inner_html().to_string()
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_then_restored() {
        let (doc, button, indicator) = setup();

        indicator.trigger(button).unwrap();
        assert_eq!(label(&doc, button), DEFAULT_BUSY_LABEL);
        assert!(indicator.is_busy(button));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(label(&doc, button), DEFAULT_BUSY_LABEL);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(label(&doc, button), ORIGINAL);
        assert!(!indicator.is_busy(button));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_click_restarts_interval() {
        let (doc, button, indicator) = setup();

        indicator.trigger(button).unwrap();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        indicator.trigger(button).unwrap();
        assert_eq!(indicator.pending_count(), 1);

        // First interval would have ended here
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(label(&doc, button), DEFAULT_BUSY_LABEL);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(label(&doc, button), ORIGINAL);
        assert_eq!(indicator.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_clicks_keep_original_label() {
        let (doc, button, indicator) = setup();

        for _ in 0..5 {
            indicator.trigger(button).unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(label(&doc, button), ORIGINAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_restores_immediately() {
        let (doc, button, indicator) = setup();

        indicator.trigger(button).unwrap();
        indicator.cancel_all();

        assert_eq!(label(&doc, button), ORIGINAL);
        assert!(!indicator.cancel(button).unwrap());

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(label(&doc, button), ORIGINAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_node() {
        let (_, _, indicator) = setup();
        assert!(matches!(
            indicator.trigger(NodeId(10_000)),
            Err(DownloadError::Dom(_))
        ));
        assert_eq!(indicator.pending_count(), 0);
    }

    #[test]
    fn test_requires_runtime() {
        let (_, button, indicator) = setup();
        assert!(matches!(
            indicator.trigger(button),
            Err(DownloadError::NoRuntime)
        ));
    }
}
