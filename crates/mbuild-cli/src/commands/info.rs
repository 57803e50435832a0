use crate::cli::InfoArgs;
use crate::error::Result;
use mbuild::core::io::template::load_template;
use mbuild::core::models::compound::Compound;
use tracing::info;

/// Renders the summary printed by `mbuild info`.
fn describe(compound: &Compound) -> String {
    let atoms = compound.atoms();
    let ghosts = atoms.values().filter(|atom| atom.is_ghost()).count();

    let mut lines = vec![
        format!("Compound: {}", compound.label()),
        format!("Atoms: {} ({} port ghosts)", atoms.len() - ghosts, ghosts),
    ];

    for (label, child) in compound.children() {
        let Some(port) = child.as_compound().filter(|c| c.is_port()) else {
            continue;
        };
        let references: Vec<String> = port
            .references()
            .map(|(name, path)| format!("{name} -> {path}"))
            .collect();
        lines.push(format!("Port {}: [{}]", label, references.join(", ")));
    }

    match compound.boundingbox(true) {
        Some(bbox) => {
            let extent = bbox.extent();
            lines.push(format!(
                "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3}), extent {:.3} x {:.3} x {:.3}",
                bbox.min.x, bbox.min.y, bbox.min.z, bbox.max.x, bbox.max.y, bbox.max.z, extent.x, extent.y, extent.z
            ));
        }
        None => lines.push("Bounding box: empty".to_string()),
    }

    lines.join("\n")
}

pub fn run(args: InfoArgs) -> Result<()> {
    info!("Loading template from {:?}", &args.template);
    let compound = load_template(&args.template)?.build()?;
    println!("{}", describe(&compound));
    Ok(())
}
