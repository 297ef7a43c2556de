/*!
Mount path decomposition.

A service mounted at `api/v1/widgets/parts` with prefix `api/v\d+/` and version
pattern `v\d+` yields an `api_path` of `widgets/parts`, the tag `widgets v1`
and the model name `parts`. The version is matched against the path before
the prefix is stripped.
*/

use regex::Regex;

/// Everything derived from one mount path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    /// Mount path without leading or trailing slashes
    pub path: String,
    /// Mount path with the configured prefix stripped
    pub api_path: String,
    /// `api_path` split on `/`
    pub group: Vec<String>,
    /// Grouping key: first segment plus the version suffix
    pub tag: String,
    /// Second segment when nested, else `api_path`
    pub model: String,
    /// Version token matched by the version pattern
    pub version: Option<String>,
}

impl RouteInfo {
    /// Path key for collection-scoped operations (`find`, `create`)
    pub fn collection_key(&self) -> String {
        format!("/{}", self.path)
    }

    /// Path key for item-scoped operations (`get`, `update`, `patch`, `remove`)
    pub fn item_key(&self, id_name: &str) -> String {
        format!("/{}/{{{}}}", self.path, id_name)
    }
}

/// Decompose a mount path into its tag, model and version.
///
/// Never fails. A prefix that does not match leaves the path as is; a version
/// pattern that does not match leaves the tag without a suffix.
pub fn derive_route_info(
    mount_path: &str,
    prefix: Option<&Regex>,
    version_pattern: Option<&Regex>,
) -> RouteInfo {
    let path = mount_path.trim_matches('/').to_string();

    let version = version_pattern
        .and_then(|pattern| pattern.find(&path))
        .map(|found| found.as_str().to_string())
        .filter(|found| !found.is_empty());

    let api_path = match prefix {
        Some(prefix) => prefix.replace(&path, "").trim_start_matches('/').to_string(),
        None => path.clone(),
    };

    let group: Vec<String> = api_path.split('/').map(str::to_string).collect();
    let nested = api_path.contains('/');

    let base = if nested { group[0].clone() } else { api_path.clone() };
    let tag = match &version {
        Some(version) => format!("{} {}", base, version),
        None => base,
    };

    let model = if nested {
        group[1].clone()
    } else {
        api_path.clone()
    };

    RouteInfo {
        path,
        api_path,
        group,
        tag,
        model,
        version,
    }
}
