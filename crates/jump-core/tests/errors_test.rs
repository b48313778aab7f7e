use jump_core::errors::{ConfigError, ImportError, JumpError, JumpErrorCode, StoreError};

#[test]
fn store_errors_carry_codes() {
    let decode = StoreError::Decode {
        path: "/tmp/db.json".to_string(),
        message: "bad".to_string(),
    };
    assert_eq!(decode.error_code(), "SNAPSHOT_CORRUPT");

    let rename = StoreError::Rename {
        from: "a".to_string(),
        to: "b".to_string(),
        message: "denied".to_string(),
    };
    assert_eq!(rename.error_code(), "STORE_IO");
    assert_eq!(rename.coded_string(), "[STORE_IO] failed to rename a to b: denied");
}

#[test]
fn aggregate_delegates_codes() {
    let err: JumpError = ConfigError::FileNotFound {
        path: "x".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err: JumpError = ImportError::NotFound {
        path: "x".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "IMPORT_ERROR");

    let err = JumpError::InvalidArgument("zero".to_string());
    assert_eq!(err.error_code(), "INVALID_ARGUMENT");
}

#[test]
fn write_failure_is_an_io_error() {
    let write = StoreError::Write {
        path: "/tmp/db.json".to_string(),
        message: "disk full".to_string(),
    };
    assert_eq!(write.error_code(), "STORE_IO");
    assert_eq!(write.to_string(), "failed to write /tmp/db.json: disk full");
}
