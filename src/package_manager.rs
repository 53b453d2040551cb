//! Guess which package manager launched us from `npm_config_user_agent`.

pub const USER_AGENT_ENV: &str = "npm_config_user_agent";
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkgInfo {
    pub name: String,
    pub version: String,
}

/// Parse a user agent like `pnpm/8.1.0 npm/? node/v18.0.0 linux x64`.
pub fn pkg_from_user_agent(user_agent: Option<&str>) -> Option<PkgInfo> {
    let user_agent = user_agent.filter(|ua| !ua.is_empty())?;
    let first = user_agent.split(' ').next().unwrap_or(user_agent);
    let (name, version) = first.split_once('/').unwrap_or((first, ""));
    Some(PkgInfo {
        name: name.to_string(),
        version: version.to_string(),
    })
}
