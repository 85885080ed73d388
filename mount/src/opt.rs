use crate::error::MountOptError;
use crate::parser::parse;
use crate::types::MountDescriptor;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Collects the mounts given through a repeatable `--mount` flag.
///
/// Every successful [`MountOpt::set`] appends one descriptor; the order of
/// the flags on the command line is preserved.
#[derive(Debug, Default)]
pub struct MountOpt {
    values: Mutex<Vec<MountDescriptor>>,
}

impl MountOpt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `value` and append the resulting mount.
    ///
    /// On error nothing is appended and previously collected mounts are kept.
    pub fn set(&self, value: &str) -> Result<(), MountOptError> {
        let mount = parse(value).inspect_err(|e| {
            tracing::debug!("Rejected mount specification {:?}: {}", value, e);
        })?;
        self.lock().push(mount);
        Ok(())
    }

    /// Name of the value type, as shown in flag help.
    pub fn type_name(&self) -> &'static str {
        "mount"
    }

    pub fn values(&self) -> Vec<MountDescriptor> {
        self.lock().clone()
    }

    pub fn into_values(self) -> Vec<MountDescriptor> {
        self.values
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// One `"<type> <source> <target>"` entry per mount, joined by `", "`.
    pub fn render(&self) -> String {
        self.lock()
            .iter()
            .map(|m| format!("{} {} {}", m.kind, m.source, m.target))
            .collect::<Vec<_>>()
            .join(", ")
    }

    // Appends never leave the vector half-written, so a poisoned lock is
    // still safe to read.
    fn lock(&self) -> MutexGuard<'_, Vec<MountDescriptor>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Display for MountOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Clone for MountOpt {
    fn clone(&self) -> Self {
        Self {
            values: Mutex::new(self.values()),
        }
    }
}
