use mountopt::{MountDescriptor, MountOpt};

use crate::utils::{format_bandwidth, or_none};

pub fn inspect_mounts(opt: &MountOpt) {
    for (i, mount) in opt.values().iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", describe(i, mount));
    }
}

fn describe(index: usize, mount: &MountDescriptor) -> String {
    let mut out = String::new();

    out.push_str(&format!("Mount [{}]:\n", index));
    out.push_str(&format!("  Type: {}\n", mount.kind));
    out.push_str(&format!("  Source: {}\n", or_none(&mount.source)));
    out.push_str(&format!("  Target: {}\n", mount.target));
    out.push_str(&format!("  ReadOnly: {}\n", mount.read_only));
    out.push_str(&format!(
        "  MaxBandwidth: {}\n",
        format_bandwidth(mount.max_bandwidth)
    ));
    out.push_str(&format!("  MaxIOps: {}\n", mount.max_iops));

    if let Some(bind) = &mount.bind_options {
        out.push_str("  BindOptions:\n");
        out.push_str(&format!("    Propagation: {}\n", bind.propagation));
    }

    if let Some(volume) = &mount.volume_options {
        out.push_str("  VolumeOptions:\n");
        out.push_str(&format!("    NoCopy: {}\n", volume.no_copy));
        if !volume.driver_config.name.is_empty() {
            out.push_str(&format!("    Driver: {}\n", volume.driver_config.name));
        }
        if !volume.labels.is_empty() {
            out.push_str("    Labels:\n");
            for (key, value) in &volume.labels {
                out.push_str(&format!("      {}: {}\n", key, value));
            }
        }
        if !volume.driver_config.options.is_empty() {
            out.push_str("    DriverOptions:\n");
            for (key, value) in &volume.driver_config.options {
                out.push_str(&format!("      {}: {}\n", key, value));
            }
        }
    }

    out
}
