use mountopt::MountOpt;

pub fn print_mounts(opt: &MountOpt, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let output = serde_json::to_string_pretty(&opt.values())?;
        println!("{}", output);
    } else {
        println!("{}", opt);
    }
    Ok(())
}
