mod watcher;

pub use watcher::ClipboardWatcher;
