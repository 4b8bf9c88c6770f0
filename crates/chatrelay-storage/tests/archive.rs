//! Archive behaviour without a reachable S3. The "enabled" cases point the
//! client at a closed localhost port with retries disabled.

use aws_sdk_s3::Client;
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

use chatrelay_core::models::log_record::{LogRecord, Role};
use chatrelay_storage::archive::ChatArchive;
use chatrelay_storage::error::StorageError;

fn unreachable_client() -> Client {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("eu-west-1"))
        .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
        .endpoint_url("http://127.0.0.1:9")
        .force_path_style(true)
        .retry_config(RetryConfig::disabled())
        .build();
    Client::from_conf(config)
}

#[tokio::test]
async fn missing_bucket_disables_archive() {
    let archive = ChatArchive::new(unreachable_client(), None);
    assert!(matches!(archive, ChatArchive::Disabled));
    assert!(archive.bucket().is_none());
}

#[tokio::test]
async fn empty_bucket_disables_archive() {
    let archive = ChatArchive::new(unreachable_client(), Some(String::new()));
    assert!(matches!(archive, ChatArchive::Disabled));
}

#[tokio::test]
async fn configured_bucket_enables_archive() {
    let archive = ChatArchive::new(unreachable_client(), Some("chat-logs".to_string()));
    assert_eq!(archive.bucket(), Some("chat-logs"));
}

#[tokio::test]
async fn disabled_archive_reports_not_configured() {
    let archive = ChatArchive::Disabled;
    let record = LogRecord::now("c", Role::User, "hi");

    let err = archive.try_record(&record).await.unwrap_err();
    assert!(matches!(err, StorageError::NotConfigured));

    let err = archive.write_test_object().await.unwrap_err();
    assert!(matches!(err, StorageError::NotConfigured));
}

#[tokio::test]
async fn disabled_archive_record_is_a_no_op() {
    ChatArchive::Disabled.record("c", Role::User, "hi").await;
}

#[tokio::test]
async fn write_failure_surfaces_as_put_object_error() {
    let archive = ChatArchive::new(unreachable_client(), Some("chat-logs".to_string()));
    let record = LogRecord::now("c", Role::Assistant, "hello");

    let err = archive.try_record(&record).await.unwrap_err();
    assert!(matches!(err, StorageError::PutObject(_)), "got {err:?}");

    let err = archive.write_test_object().await.unwrap_err();
    assert!(matches!(err, StorageError::PutObject(_)), "got {err:?}");
}

#[tokio::test]
async fn write_failure_is_swallowed_by_record() {
    let archive = ChatArchive::new(unreachable_client(), Some("chat-logs".to_string()));
    archive.record("c", Role::System, "(ERROR) something").await;
}
