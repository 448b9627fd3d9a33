//! Point d'entrée: pipeline séquentiel fetch → parse → résolution → émission
//!
//! Pas de CLI, pas de configuration: boîte englobante, nom du fichier de
//! sortie et style sont des constantes de compilation. Toute erreur de
//! fetch/parse/écriture est fatale et termine le run avec un diagnostic.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use boundary_map::fetch::{self, BOUNDING_BOX};
use boundary_map::html;
use boundary_map::render::{self, DrawInstruction};

fn main() -> Result<()> {
    init_logging();

    let raw = fetch::fetch_map_data(BOUNDING_BOX).context("failed to fetch the OSM extract")?;
    info!(bytes = raw.len(), "OSM extract fetched");

    let document = osm_xml::parse(&raw).context("failed to parse the OSM extract")?;
    info!(
        nodes = document.node.len(),
        ways = document.way.len(),
        "document parsed"
    );

    let instructions = render::draw_instructions(&document);
    let polygons = instructions
        .iter()
        .filter(|i| matches!(i, DrawInstruction::Polygon { .. }))
        .count();

    html::write_map_file(Path::new(html::OUTPUT_FILE), &instructions)
        .context("failed to write the map file")?;

    info!(
        markers = instructions.len() - polygons,
        polygons,
        output = html::OUTPUT_FILE,
        "map HTML file generated successfully"
    );

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
