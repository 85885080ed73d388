use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of mount requested by the user.
///
/// Values outside the known set are carried through as [`MountType::Other`];
/// the runtime decides whether it supports them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MountType {
    Bind,
    #[default]
    Volume,
    Tmpfs,
    Npipe,
    Cluster,
    Image,
    Other(String),
}

impl MountType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bind => "bind",
            Self::Volume => "volume",
            Self::Tmpfs => "tmpfs",
            Self::Npipe => "npipe",
            Self::Cluster => "cluster",
            Self::Image => "image",
            Self::Other(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl From<&str> for MountType {
    fn from(value: &str) -> Self {
        let value = value.to_lowercase();
        match value.as_str() {
            "bind" => Self::Bind,
            "volume" => Self::Volume,
            "tmpfs" => Self::Tmpfs,
            "npipe" => Self::Npipe,
            "cluster" => Self::Cluster,
            "image" => Self::Image,
            _ => Self::Other(value),
        }
    }
}

impl From<String> for MountType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<MountType> for String {
    fn from(value: MountType) -> Self {
        match value {
            MountType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mount propagation mode for bind mounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Propagation {
    #[default]
    RPrivate,
    Private,
    RShared,
    Shared,
    RSlave,
    Slave,
    Other(String),
}

impl Propagation {
    pub fn as_str(&self) -> &str {
        match self {
            Self::RPrivate => "rprivate",
            Self::Private => "private",
            Self::RShared => "rshared",
            Self::Shared => "shared",
            Self::RSlave => "rslave",
            Self::Slave => "slave",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for Propagation {
    fn from(value: &str) -> Self {
        let value = value.to_lowercase();
        match value.as_str() {
            "rprivate" => Self::RPrivate,
            "private" => Self::Private,
            "rshared" => Self::RShared,
            "shared" => Self::Shared,
            "rslave" => Self::RSlave,
            "slave" => Self::Slave,
            _ => Self::Other(value),
        }
    }
}

impl From<String> for Propagation {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Propagation> for String {
    fn from(value: Propagation) -> Self {
        match value {
            Propagation::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Propagation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DriverConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolumeOptions {
    #[serde(default)]
    pub no_copy: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub driver_config: DriverConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BindOptions {
    pub propagation: Propagation,
}

/// A validated mount request, as produced by [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MountDescriptor {
    #[serde(rename = "Type")]
    pub kind: MountType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_bandwidth: u64,
    #[serde(default, rename = "MaxIOps", skip_serializing_if = "is_zero")]
    pub max_iops: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_options: Option<VolumeOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_options: Option<BindOptions>,
}

fn is_zero(v: &u64) -> bool {
    *v == 0
}

impl MountDescriptor {
    /// Returns the volume options, creating them on first use.
    pub fn ensure_volume_options(&mut self) -> &mut VolumeOptions {
        self.volume_options.get_or_insert_with(VolumeOptions::default)
    }

    /// Returns the bind options, creating them on first use.
    pub fn ensure_bind_options(&mut self) -> &mut BindOptions {
        self.bind_options.get_or_insert_with(BindOptions::default)
    }

    pub fn is_anonymous(&self) -> bool {
        self.source.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_type_lowercases_and_passes_through() {
        assert_eq!(MountType::from("BIND"), MountType::Bind);
        assert_eq!(MountType::from("Tmpfs"), MountType::Tmpfs);
        assert_eq!(
            MountType::from("Weird"),
            MountType::Other("weird".to_string())
        );
        assert!(MountType::from("").is_empty());
        assert_eq!(MountType::default().to_string(), "volume");
    }

    #[test]
    fn test_propagation_from_str() {
        assert_eq!(Propagation::from("RShared"), Propagation::RShared);
        assert_eq!(Propagation::from("slave").as_str(), "slave");
        assert_eq!(
            Propagation::from("bogus"),
            Propagation::Other("bogus".to_string())
        );
    }

    #[test]
    fn test_ensure_options_are_lazy() {
        let mut m = MountDescriptor::default();
        assert!(m.volume_options.is_none());
        m.ensure_volume_options().no_copy = true;
        m.ensure_volume_options()
            .labels
            .insert("a".to_string(), "b".to_string());

        let opts = m.volume_options.as_ref().unwrap();
        assert!(opts.no_copy);
        assert_eq!(opts.labels.len(), 1);
        assert!(m.bind_options.is_none());

        m.ensure_bind_options().propagation = Propagation::Shared;
        assert_eq!(m.bind_options.unwrap().propagation, Propagation::Shared);
    }

    #[test]
    fn test_serialize_uses_api_field_names() {
        let m = MountDescriptor {
            kind: MountType::Bind,
            source: "/a".to_string(),
            target: "/b".to_string(),
            read_only: true,
            max_iops: 10,
            bind_options: Some(BindOptions {
                propagation: Propagation::RSlave,
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["Type"], "bind");
        assert_eq!(json["Source"], "/a");
        assert_eq!(json["Target"], "/b");
        assert_eq!(json["ReadOnly"], true);
        assert_eq!(json["MaxIOps"], 10);
        assert_eq!(json["BindOptions"]["Propagation"], "rslave");
        assert!(json.get("MaxBandwidth").is_none());
        assert!(json.get("VolumeOptions").is_none());

        let back: MountDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }
}
