use mountopt::{MountDescriptor, MountOpt};

use crate::utils::{format_bandwidth, or_none};

pub fn list_mounts(opt: &MountOpt) {
    println!(
        "{:<10} {:<30} {:<30} {:<5} {:<12} {:<8}",
        "TYPE", "SOURCE", "TARGET", "MODE", "BANDWIDTH", "IOPS"
    );

    for mount in opt.values() {
        println!("{}", table_row(&mount));
    }
}

fn table_row(mount: &MountDescriptor) -> String {
    let mode = if mount.read_only { "ro" } else { "rw" };
    let iops = if mount.max_iops == 0 {
        "-".to_string()
    } else {
        mount.max_iops.to_string()
    };

    format!(
        "{:<10} {:<30} {:<30} {:<5} {:<12} {:<8}",
        mount.kind,
        or_none(&mount.source),
        mount.target,
        mode,
        format_bandwidth(mount.max_bandwidth),
        iops
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_row() {
        let mount = mountopt::parse("type=bind,src=/a,dst=/b,ro,max-iops=10").unwrap();
        let row = table_row(&mount);
        let cols: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(cols, vec!["bind", "/a", "/b", "ro", "-", "10"]);
    }

    #[test]
    fn test_table_row_anonymous_volume() {
        let mount = mountopt::parse("target=/data,max-bandwidth=2m").unwrap();
        let cols: Vec<String> = table_row(&mount)
            .split_whitespace()
            .map(String::from)
            .collect();
        assert_eq!(cols, vec!["volume", "<none>", "/data", "rw", "2.00MB/s", "-"]);
    }
}
