//! Émission du document HTML statique (gabarit Leaflet, streaming)

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::render::DrawInstruction;

/// Nom fixe du fichier de sortie, créé dans le répertoire courant
pub const OUTPUT_FILE: &str = "map.html";

const TITLE: &str = "Map of The Beylik of Karaman and its Surrounding Territories";

/// Centre initial de la carte (`[lat, lon]`) et niveau de zoom
const MAP_CENTER: &str = "[38, 32]";
const MAP_ZOOM: u8 = 8;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

/// Écrit le document complet: en-tête Leaflet, une déclaration par
/// instruction (dans l'ordre reçu), puis le pied de page.
pub fn emit<W: Write>(writer: &mut W, instructions: &[DrawInstruction]) -> io::Result<()> {
    write_header(writer)?;

    for instruction in instructions {
        write_instruction(writer, instruction)?;
    }

    write_footer(writer)?;
    Ok(())
}

/// Crée le fichier de sortie et y émet les instructions.
pub fn write_map_file(path: &Path, instructions: &[DrawInstruction]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    emit(&mut writer, instructions)?;
    writer.flush()?;

    info!(output = %path.display(), "map file written");
    Ok(())
}

fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html>")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "<title>{}</title>", TITLE)?;
    writeln!(writer, r#"<meta charset="utf-8" />"#)?;
    writeln!(
        writer,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#
    )?;
    writeln!(
        writer,
        r#"<link rel="stylesheet" href="https://unpkg.com/leaflet/dist/leaflet.css" />"#
    )?;
    writeln!(
        writer,
        r#"<script src="https://unpkg.com/leaflet/dist/leaflet.js"></script>"#
    )?;
    writeln!(
        writer,
        "<style> #map {{ height: 100%; width: 100%; }} </style>"
    )?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, r#"<div id="map"></div>"#)?;
    writeln!(writer, "<script>")?;
    writeln!(
        writer,
        "var map = L.map('map').setView({}, {});",
        MAP_CENTER, MAP_ZOOM
    )?;
    writeln!(writer, "L.tileLayer('{}', {{", TILE_URL)?;
    writeln!(writer, "attribution: '{}'", TILE_ATTRIBUTION)?;
    writeln!(writer, "}}).addTo(map);")?;
    Ok(())
}

/// Écrit la déclaration Leaflet d'une instruction de dessin
fn write_instruction<W: Write>(writer: &mut W, instruction: &DrawInstruction) -> io::Result<()> {
    match instruction {
        DrawInstruction::Marker { lat, lon } => {
            writeln!(writer, "L.marker([{}, {}]).addTo(map);", lat, lon)?;
        }
        DrawInstruction::Polygon { ring, color } => {
            writeln!(writer, "var latlngs = [")?;
            for (lat, lon) in ring {
                writeln!(writer, "[{}, {}],", lat, lon)?;
            }
            writeln!(writer, "];")?;
            writeln!(writer, "L.polygon(latlngs, {{color: '{}'}}).addTo(map);", color)?;
        }
    }
    Ok(())
}

fn write_footer<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "</script>")?;
    writeln!(writer, "</body>")?;
    write!(writer, "</html>")?;
    Ok(())
}
