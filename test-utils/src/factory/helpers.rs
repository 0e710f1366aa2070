use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns a process-wide unique counter value.
///
/// Used by the factories to generate distinct default slugs, usernames, and
/// titles so that multiple entities created in one test never collide.
pub fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
