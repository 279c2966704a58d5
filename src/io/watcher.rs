use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the TUI event loop.
#[derive(Debug, PartialEq, Eq)]
pub enum FileEvent {
    /// The catalog file was created, modified, or replaced on disk.
    CatalogChanged(PathBuf),
}

/// Watches a single catalog file for changes.
///
/// The parent directory is watched rather than the file itself so that
/// editors which save by rename-and-replace are still noticed.
pub struct CatalogWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl CatalogWatcher {
    /// Start watching `catalog_path`.
    /// Returns a `CatalogWatcher` whose `poll()` method should be called each tick.
    pub fn start(catalog_path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let target = catalog_path.to_path_buf();
        let dir = catalog_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };
                if let Some(changed) = relevant_change(&event, &target) {
                    let _ = tx.send(FileEvent::CatalogChanged(changed));
                }
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        Ok(CatalogWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for pending file events.
    /// Returns all queued events (may be empty).
    pub fn poll(&self) -> Vec<FileEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

/// The catalog path, if `event` is a create/modify/remove touching it.
fn relevant_change(event: &Event, target: &Path) -> Option<PathBuf> {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
        _ => return None,
    }
    let target_name = target.file_name()?;
    event
        .paths
        .iter()
        .find(|p| p.as_path() == target || p.file_name() == Some(target_name))
        .map(|_| target.to_path_buf())
}
