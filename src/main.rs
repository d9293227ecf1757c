//! rkvox - inspect and normalize layered voxel documents.
//!
//! Usage: rkvox <DOCUMENT> [OPTIONS]
//!
//! Options:
//!   --normalize        Rewrite the document in canonical form
//!   --out <PATH>       Write the normalized document here instead of in place
//!   --config <PATH>    Editor configuration (JSON, defaults if missing)

use std::path::PathBuf;

use rkvox::core::{logging, EditorConfig};
use rkvox::editor::EditorSession;

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(document) = args.get(1).filter(|a| !a.starts_with("--")) else {
        print_usage();
        std::process::exit(2);
    };

    let normalize = has_flag(&args, "--normalize");
    let out = parse_str_arg(&args, "--out").map(PathBuf::from);
    let config = parse_str_arg(&args, "--config")
        .map(EditorConfig::load_or_default)
        .unwrap_or_default();

    if let Err(e) = run(PathBuf::from(document), normalize, out, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(document: PathBuf, normalize: bool, out: Option<PathBuf>, config: EditorConfig) -> rkvox::core::Result<()> {
    let mut session = EditorSession::open(&document, config)?;

    let model = session.model();
    for (index, layer_type) in model.layer_types.iter().enumerate() {
        let variations: Vec<String> = layer_type
            .variations
            .values()
            .map(|layer| format!("{} ({} voxels)", layer.name, layer.store.len()))
            .collect();
        log::info!(
            "Layer {} '{}' active '{}': {}",
            index,
            layer_type.name,
            session.state().active_variation(index).unwrap_or_default(),
            variations.join(", ")
        );
    }
    log::info!(
        "{} layer types, {} voxels total, {} visible",
        model.layer_types.len(),
        model.voxel_count(),
        session.composite().len()
    );

    if normalize {
        match out {
            Some(path) => session.save_as(path)?,
            None => session.save()?,
        }
    }
    Ok(())
}

fn print_usage() {
    eprintln!("rkvox - layered voxel document tool");
    eprintln!();
    eprintln!("Usage: rkvox <DOCUMENT> [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    --normalize        Rewrite the document in canonical form");
    eprintln!("    --out <PATH>       Destination for --normalize (default: in place)");
    eprintln!("    --config <PATH>    Editor configuration file");
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
