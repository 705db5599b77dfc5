use anyhow::Result;

use biis_xml::gif::{CREATOR, FORMAT, MODEL_VERSION};
use biis_xml::plugin::{
    BiisXmlPlugin, ImportWorker, Plugin, PARAMETER_NAME, SUPPORTED_MODEL_VERSION_PREFIX,
};

/// Display plugin identity and capabilities
pub fn run() -> Result<()> {
    let plugin = BiisXmlPlugin::new();

    println!("BIIS-XML Plugin Information");
    println!("===========================");
    println!("Name: {}", plugin.plugin_name());
    println!("Id: {}", plugin.plugin_id());
    println!("Version: {}", plugin.plugin_version());
    println!();

    println!("Model:");
    println!("  Supported versions: {}*", SUPPORTED_MODEL_VERSION_PREFIX);
    println!("  Produced version: {}", MODEL_VERSION);
    println!("  Creator: {}", CREATOR);
    println!("  Format: {}", FORMAT);
    println!();

    println!("Workers:");
    match plugin.import_worker() {
        Some(worker) => {
            let subsets: Vec<_> = worker
                .supported_subsets()
                .iter()
                .map(|s| s.label())
                .collect();
            println!("  Import: subsets {}", subsets.join(", "));
            let config = worker.required_configuration();
            for slot in config.slot_names() {
                println!("    stream parameter: {}", slot);
            }
        }
        None => println!("  Import: not supported"),
    }
    match plugin.export_worker() {
        Some(_) => println!("  Export: supported"),
        None => println!("  Export: not supported"),
    }
    println!();
    println!("Pass the input stream as \"{}\".", PARAMETER_NAME);

    Ok(())
}
