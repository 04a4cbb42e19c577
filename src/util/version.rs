pub const APP_NAME: &str = "Shipster";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

/// User agent sent to the load board.
pub fn user_agent() -> String {
    format!("{}/{}", APP_NAME.to_lowercase(), version_label())
}

fn label_for(tag: Option<&str>, version: &str) -> String {
    match tag {
        Some(tag) => tag.to_string(),
        None => format!("v{version}"),
    }
}
