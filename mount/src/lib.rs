//! Parser for `--mount` option values.
//!
//! A value such as `type=bind,source=/srv/data,target=/data,readonly` is
//! turned into a validated [`MountDescriptor`]. [`MountOpt`] collects the
//! descriptors of a repeatable flag in command-line order.

mod error;
mod fields;
mod opt;
mod parser;
mod types;
mod units;

pub use error::MountOptError;
pub use fields::split_record;
pub use opt::MountOpt;
pub use parser::parse;
pub use types::{BindOptions, DriverConfig, MountDescriptor, MountType, Propagation, VolumeOptions};
pub use units::{parse_bool, ram_in_bytes};
