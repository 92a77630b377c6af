//! Removal without a sentinel pair falls back to hostname substring matching.

mod common;

use std::fs;
use webblocker::hosts::{EditOptions, RemovalStrategy, RemoveOutcome};

const NO_BACKUP: EditOptions = EditOptions {
    dry_run: false,
    make_backup: false,
};

#[test]
fn removes_exactly_matching_lines_in_order() {
    let dir = common::temp_dir();
    let hosts = common::write_hosts(
        dir.path(),
        "127.0.0.1\tlocalhost\n127.0.0.1 a.com\n10.0.0.1 nas.lan\n127.0.0.1 www.b.com\n::1\tlocalhost\n",
    );
    let editor = common::editor(&hosts, &["a.com", "b.com"]);

    let outcome = editor.remove_block(NO_BACKUP).unwrap();
    assert_eq!(
        outcome,
        RemoveOutcome::Removed {
            strategy: RemovalStrategy::Fallback,
            lines: 2,
            backup: None
        }
    );
    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "127.0.0.1\tlocalhost\n10.0.0.1 nas.lan\n::1\tlocalhost\n"
    );
}

#[test]
fn substring_match_also_hits_longer_hostnames() {
    let dir = common::temp_dir();
    let hosts = common::write_hosts(dir.path(), "1.2.3.4 notfacebook.com\nkeep\n");
    let editor = common::editor(&hosts, &["facebook.com"]);

    editor.remove_block(NO_BACKUP).unwrap();

    assert_eq!(fs::read_to_string(&hosts).unwrap(), "keep\n");
}

#[test]
fn unterminated_start_marker_uses_fallback() {
    let dir = common::temp_dir();
    let hosts = common::write_hosts(dir.path(), "# WEBBLOCKER START\n127.0.0.1 a.com\nkeep\n");
    let editor = common::editor(&hosts, &["a.com"]);

    let outcome = editor.remove_block(NO_BACKUP).unwrap();
    assert!(matches!(
        outcome,
        RemoveOutcome::Removed {
            strategy: RemovalStrategy::Fallback,
            lines: 1,
            ..
        }
    ));
    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "# WEBBLOCKER START\nkeep\n"
    );
}

#[test]
fn end_marker_before_start_is_not_a_block() {
    let dir = common::temp_dir();
    let hosts = common::write_hosts(
        dir.path(),
        "# WEBBLOCKER END\n127.0.0.1 a.com\n# WEBBLOCKER START\n",
    );
    let editor = common::editor(&hosts, &["a.com"]);

    let outcome = editor.remove_block(NO_BACKUP).unwrap();
    assert!(matches!(
        outcome,
        RemoveOutcome::Removed {
            strategy: RemovalStrategy::Fallback,
            ..
        }
    ));
}

#[test]
fn sentinel_with_different_case_is_not_recognised() {
    let dir = common::temp_dir();
    let hosts = common::write_hosts(
        dir.path(),
        "# webblocker start\n127.0.0.1 a.com\n# webblocker end\n",
    );
    let editor = common::editor(&hosts, &["a.com"]);

    editor.remove_block(NO_BACKUP).unwrap();

    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "# webblocker start\n# webblocker end\n"
    );
}

#[test]
fn nothing_to_remove_leaves_file_alone() {
    let dir = common::temp_dir();
    let hosts = common::write_hosts(dir.path(), "127.0.0.1\tlocalhost\n");
    let editor = common::editor(&hosts, &["a.com"]);

    let outcome = editor
        .remove_block(EditOptions {
            dry_run: false,
            make_backup: true,
        })
        .unwrap();

    assert_eq!(outcome, RemoveOutcome::NothingToRemove);
    assert_eq!(fs::read_to_string(&hosts).unwrap(), "127.0.0.1\tlocalhost\n");
    assert!(!webblocker::backup::backup_path(&hosts).exists());
}
