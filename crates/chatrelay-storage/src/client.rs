use aws_sdk_s3::Client;

/// Build an S3 client from a loaded SDK config.
///
/// Construction never talks to AWS; bad credentials or a missing bucket only
/// surface on the first write.
pub fn build_client(config: &aws_config::SdkConfig) -> Client {
    Client::new(config)
}
