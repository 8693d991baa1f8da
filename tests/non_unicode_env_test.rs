//! Separate binary: sets the required variables in the real environment.
#![cfg(unix)]

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use copilot_rs::config::report::{Report, Status};
use copilot_rs::config::{Config, GOOGLE_API_KEY, MONGO_DB_NAME, MONGO_URI};
use copilot_rs::error::Error;

#[test]
fn non_unicode_value_counts_as_missing() {
    unsafe {
        std::env::set_var(GOOGLE_API_KEY, OsStr::from_bytes(b"\xff\xfe"));
        std::env::set_var(MONGO_URI, "mongodb://localhost:27017/");
        std::env::set_var(MONGO_DB_NAME, "system_design_copilot");
    }

    match Config::load() {
        Err(Error::MissingConfiguration { missing }) => {
            assert_eq!(missing, vec![GOOGLE_API_KEY]);
        }
        other => panic!("expected MissingConfiguration, got {other:?}"),
    }

    let report = Report::from_env();
    assert_eq!(report.missing(), vec![GOOGLE_API_KEY]);
    assert!(!report.is_ready());
    assert_eq!(report.variables[0].status, Status::Unset);
}
