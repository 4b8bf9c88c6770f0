use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

/// Put an object to S3. Returns the new ETag.
///
/// The error text includes the full SDK error chain so that transport
/// failures (DNS, refused connections, expired credentials) stay readable
/// in logs and in the `/s3-test` reply.
pub async fn put_object(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: Option<&str>,
) -> Result<String, StorageError> {
    let mut req = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body));

    if let Some(ct) = content_type {
        req = req.content_type(ct);
    }

    let resp = req
        .send()
        .await
        .map_err(|e| StorageError::PutObject(DisplayErrorContext(&e).to_string()))?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// Serialize `value` as compact JSON and put it with
/// `Content-Type: application/json`.
pub async fn put_json<T: serde::Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec(value)?;
    put_object(client, bucket, key, body, Some("application/json")).await
}
