mod watcher;

pub use watcher::PreferenceWatcher;
