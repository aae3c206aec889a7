// Integration tests for src/io/prefs.rs.

use unmoz::config::MAX_INPUT_SIZE_DEFAULT;
use unmoz::io::Prefs;
use unmoz::DecodeLimits;

#[test]
fn default_prefs() {
    let p = Prefs::new();
    assert!(p.overwrite);
    assert_eq!(p.max_input_size, MAX_INPUT_SIZE_DEFAULT);
}

#[test]
fn limits_follow_max_input_size() {
    let mut p = Prefs::new();
    p.set_max_input_size(1 << 30);
    assert_eq!(
        p.limits(),
        DecodeLimits {
            max_input_size: 1 << 30
        }
    );
}

#[test]
fn prefs_are_plain_values() {
    let mut a = Prefs::new();
    let b = a.clone();
    a.set_overwrite(false);
    assert_ne!(a, b);
}
