/// Load an `SdkConfig` for `region` from the default credential chain
/// (environment, shared profile, container or instance metadata).
pub async fn load_sdk_config(region: &str) -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await
}
