use super::*;
use crate::state::persist::MemoryStore;

#[test]
fn remembered_email_is_readable_until_forgotten() {
    let store = MemoryStore::default();
    assert_eq!(verified_email(&store), None);

    remember_verified_email(&store, "admin@example.com");
    assert_eq!(verified_email(&store).as_deref(), Some("admin@example.com"));

    forget_verified_email(&store);
    assert_eq!(verified_email(&store), None);
}

#[test]
fn blank_email_counts_as_missing() {
    let store = MemoryStore::default();
    remember_verified_email(&store, "  ");
    assert_eq!(verified_email(&store), None);
}
