use super::*;
use leptos::prelude::{GetUntracked, Owner};

#[test]
fn host_variables_start_empty() {
    let vars = HostVariables::default();
    assert_eq!(vars.get("ftd#dark-mode"), None);
    assert_eq!(vars.publishes(), 0);
}

#[test]
fn publish_overwrites_previous_value() {
    let mut vars = HostVariables::default();
    vars.publish("fpm#is-fallback", true);
    vars.publish("fpm#is-fallback", false);
    assert_eq!(vars.get("fpm#is-fallback"), Some(false));
    assert_eq!(vars.publishes(), 2);
}

#[test]
fn reactive_store_receives_published_values() {
    let owner = Owner::new();
    owner.set();

    let mut store = RwSignal::new(HostVariables::default());
    store.publish("ftd#dark-mode", true);
    store.publish("ftd#follow-system-dark-mode", false);

    let vars = store.get_untracked();
    assert_eq!(vars.get("ftd#dark-mode"), Some(true));
    assert_eq!(vars.get("ftd#follow-system-dark-mode"), Some(false));
    assert_eq!(vars.publishes(), 2);
}

// =============================================================
// PendingPublishes
// =============================================================

#[test]
fn pending_publishes_drain_in_order() {
    let mut pending = PendingPublishes::default();
    pending.publish("ftd#dark-mode", true);
    pending.publish("ftd#dark-mode", false);
    pending.publish("fpm#is-fallback", true);

    assert_eq!(
        pending.drain(),
        vec![
            ("ftd#dark-mode".to_owned(), true),
            ("ftd#dark-mode".to_owned(), false),
            ("fpm#is-fallback".to_owned(), true),
        ]
    );
    assert!(pending.is_empty());
    assert!(pending.drain().is_empty());
}

#[test]
fn pending_publishes_clones_share_one_queue() {
    let pending = PendingPublishes::default();
    let mut writer = pending.clone();
    writer.publish("fpm#translation-diff-open", true);
    assert!(!pending.is_empty());
    assert_eq!(pending.drain(), vec![("fpm#translation-diff-open".to_owned(), true)]);
    assert!(writer.is_empty());
}

#[test]
fn controller_publishes_wait_for_drain() {
    use crate::config::ThemeConfig;
    use crate::host::memory::{FixedSystem, MemoryClassList, MemoryCookies};
    use crate::state::dark_mode::DarkMode;

    let pending = PendingPublishes::default();
    let mut dm = DarkMode::new(
        ThemeConfig::default(),
        MemoryCookies::default(),
        MemoryClassList::default(),
        FixedSystem::dark(),
        pending.clone(),
    );
    dm.refresh_from_cookie();

    let mut delivered = HostVariables::default();
    for (name, value) in pending.drain() {
        delivered.publish(&name, value);
    }
    assert_eq!(delivered.get("ftd#dark-mode"), Some(true));
    assert_eq!(delivered.get("ftd#follow-system-dark-mode"), Some(true));
    assert!(pending.is_empty());
}
