use crate::error::MountOptError;
use crate::fields::split_record;
use crate::types::{MountDescriptor, MountType, Propagation};
use crate::units::{parse_bool, ram_in_bytes};
use std::collections::BTreeMap;

const VALUE_KEYS: &[&str] = &[
    "type",
    "source",
    "src",
    "target",
    "dst",
    "destination",
    "readonly",
    "ro",
    "max-bandwidth",
    "max-iops",
    "bind-propagation",
    "volume-nocopy",
    "volume-label",
    "volume-driver",
    "volume-opt",
];

/// Parses one `--mount` value into a validated [`MountDescriptor`].
///
/// The value is a CSV record of `key=value` fields, for example
/// `type=bind,source=/srv/data,target=/data,readonly`.
pub fn parse(raw: &str) -> Result<MountDescriptor, MountOptError> {
    let fields = split_record(raw)?;

    let mut mount = MountDescriptor::default();

    for field in &fields {
        apply_field(&mut mount, field)?;
    }

    validate(&mount)?;

    tracing::debug!(
        "Parsed {} mount: source={:?} target={:?} read_only={}",
        mount.kind,
        mount.source,
        mount.target,
        mount.read_only
    );

    Ok(mount)
}

fn apply_field(mount: &mut MountDescriptor, field: &str) -> Result<(), MountOptError> {
    let (key, value) = match field.split_once('=') {
        Some((key, value)) => (key.to_lowercase(), Some(value)),
        None => (field.to_lowercase(), None),
    };

    let Some(value) = value else {
        return match key.as_str() {
            "readonly" | "ro" => {
                mount.read_only = true;
                Ok(())
            }
            "volume-nocopy" => {
                mount.ensure_volume_options().no_copy = true;
                Ok(())
            }
            k if VALUE_KEYS.contains(&k) => Err(MountOptError::MissingValue {
                key,
                field: field.to_string(),
            }),
            _ => Err(MountOptError::UnknownKey {
                key,
                field: field.to_string(),
            }),
        };
    };

    tracing::trace!("Applying mount field {}={:?}", key, value);

    match key.as_str() {
        "type" => mount.kind = MountType::from(value),
        "source" | "src" => mount.source = value.to_string(),
        "target" | "dst" | "destination" => mount.target = value.to_string(),
        "readonly" | "ro" => {
            mount.read_only =
                parse_bool(value).ok_or_else(|| MountOptError::invalid_value(&key, value))?;
        }
        "max-bandwidth" => {
            mount.max_bandwidth =
                ram_in_bytes(value).ok_or_else(|| MountOptError::invalid_value(&key, value))?;
        }
        "max-iops" => {
            mount.max_iops = value
                .parse::<u64>()
                .map_err(|_| MountOptError::invalid_value(&key, value))?;
        }
        "bind-propagation" => {
            mount.ensure_bind_options().propagation = Propagation::from(value);
        }
        "volume-nocopy" => {
            mount.ensure_volume_options().no_copy =
                parse_bool(value).ok_or_else(|| MountOptError::invalid_value(&key, value))?;
        }
        "volume-label" => {
            set_value_on_map(&mut mount.ensure_volume_options().labels, value);
        }
        "volume-driver" => {
            mount.ensure_volume_options().driver_config.name = value.to_string();
        }
        "volume-opt" => {
            set_value_on_map(&mut mount.ensure_volume_options().driver_config.options, value);
        }
        _ => {
            return Err(MountOptError::UnknownKey {
                key,
                field: field.to_string(),
            });
        }
    }

    Ok(())
}

/// Inserts a `key[=value]` pair; a missing `=` stores an empty value.
fn set_value_on_map(target: &mut BTreeMap<String, String>, value: &str) {
    match value.split_once('=') {
        Some((k, v)) => target.insert(k.to_string(), v.to_string()),
        None => target.insert(value.to_string(), String::new()),
    };
}

fn validate(mount: &MountDescriptor) -> Result<(), MountOptError> {
    if mount.kind.is_empty() {
        return Err(MountOptError::MissingType);
    }

    // Option conflicts are reported ahead of a missing target.
    if mount.kind == MountType::Bind && mount.volume_options.is_some() {
        return Err(MountOptError::ConflictingOptions {
            family: "volume".to_string(),
            kind: mount.kind.to_string(),
        });
    }
    if mount.kind == MountType::Volume && mount.bind_options.is_some() {
        return Err(MountOptError::ConflictingOptions {
            family: "bind".to_string(),
            kind: mount.kind.to_string(),
        });
    }

    if mount.target.is_empty() {
        return Err(MountOptError::MissingTarget);
    }

    Ok(())
}

impl std::str::FromStr for MountDescriptor {
    type Err = MountOptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
