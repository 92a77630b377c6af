//! Verify sites_path() and BlockerPaths resolve correctly under WEBBLOCKER_HOME.

use webblocker::config::BlockerPaths;

mod common;

#[test]
fn paths_resolve_under_base() {
    let dir = common::temp_dir();
    let base = dir.path();
    let paths = BlockerPaths::for_test(base);

    assert_eq!(paths.config_dir, base);
    assert!(paths.sites_file.ends_with("sites.toml"));
    assert!(paths.sites_file.starts_with(base));
}

#[test]
fn sites_path_uses_webblocker_home() {
    let dir = common::temp_dir();
    let base = dir.path();

    let prev = std::env::var_os("WEBBLOCKER_HOME");
    std::env::set_var("WEBBLOCKER_HOME", base);
    let path = webblocker::config::sites_path();
    match prev {
        Some(v) => std::env::set_var("WEBBLOCKER_HOME", v),
        None => std::env::remove_var("WEBBLOCKER_HOME"),
    }

    assert!(path.starts_with(base), "sites_path should be under WEBBLOCKER_HOME");
    assert!(path.ends_with("sites.toml"));
}
