use serde::Serialize;

use super::ObjectType;

/// Every resolved field of one `SharePointObject`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSnapshot {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub name: String,
    pub host_name: String,
    pub site_name: String,
    pub host_path: String,
    pub server_relative_path: String,
    pub site_relative_path: String,
    pub parent: String,
}

impl PathSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
