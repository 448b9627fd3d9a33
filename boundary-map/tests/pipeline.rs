//! Tests d'intégration du pipeline parse → résolution → émission
//!
//! L'extrait est fourni en dur: le fetch réseau n'entre jamais dans ces
//! tests (ses chemins d'erreur sont couverts dans le module `fetch`).

use boundary_map::render::{draw_instructions, DrawInstruction};
use boundary_map::html;

/// Un petit extrait réaliste: deux nœuds hors chemin, une limite
/// administrative, une route, une référence non résoluble (hors extrait)
const EXTRACT: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="OpenStreetMap server">
  <bounds minlat="37.0000000" minlon="31.0000000" maxlat="39.0000000" maxlon="33.0000000"/>
  <node id="100" lat="38.0011223" lon="32.0044556" version="2" visible="true"/>
  <node id="101" lat="38.1000000" lon="32.1000000" version="1" visible="true"/>
  <node id="102" lat="37.9000000" lon="31.9000000" version="5" visible="true"/>
  <way id="2000" version="3" visible="true">
    <nd ref="100"/>
    <nd ref="101"/>
    <nd ref="999999"/>
    <nd ref="102"/>
    <tag k="boundary" v="administrative"/>
    <tag k="admin_level" v="6"/>
  </way>
  <way id="2001" version="1" visible="true">
    <nd ref="101"/>
    <nd ref="102"/>
    <tag k="highway" v="residential"/>
  </way>
</osm>
"#;

#[test]
fn test_full_pipeline_to_html() {
    let document = osm_xml::parse(EXTRACT).unwrap();
    let instructions = draw_instructions(&document);

    // 3 marqueurs (un par nœud) + 1 polygone (seul le chemin 2000 est retenu)
    assert_eq!(instructions.len(), 4);
    let polygons: Vec<_> = instructions
        .iter()
        .filter(|i| matches!(i, DrawInstruction::Polygon { .. }))
        .collect();
    assert_eq!(polygons.len(), 1);

    match polygons[0] {
        DrawInstruction::Polygon { ring, color } => {
            // La référence 999999 (hors extrait) est omise de l'anneau
            assert_eq!(ring.len(), 3);
            assert_eq!(ring[0], ("38.0011223".to_string(), "32.0044556".to_string()));
            assert_eq!(ring[2], ("37.9000000".to_string(), "31.9000000".to_string()));
            assert_eq!(*color, "blue");
        }
        _ => unreachable!(),
    }

    let mut buffer = Vec::new();
    html::emit(&mut buffer, &instructions).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.contains("L.marker([38.0011223, 32.0044556]).addTo(map);"));
    assert!(output.contains("L.polygon(latlngs, {color: 'blue'}).addTo(map);"));
    // Les coordonnées ressortent verbatim, zéros de queue compris
    assert!(output.contains("[37.9000000, 31.9000000],"));
}

#[test]
fn test_first_tag_rule_from_raw_xml() {
    // boundary=administrative présent mais pas en premier tag: pas retenu
    let extract = br#"<osm version="0.6">
  <node id="1" lat="38.0" lon="32.0"/>
  <way id="10">
    <nd ref="1"/>
    <tag k="name" v="x"/>
    <tag k="boundary" v="administrative"/>
  </way>
</osm>"#;

    let document = osm_xml::parse(extract).unwrap();
    let instructions = draw_instructions(&document);

    assert_eq!(instructions.len(), 1);
    assert!(matches!(instructions[0], DrawInstruction::Marker { .. }));
}

#[test]
fn test_malformed_extract_aborts_before_any_output() {
    let result = osm_xml::parse(b"this is not xml at all");

    // L'erreur remonte: le pipeline s'arrête avant toute écriture
    assert!(result.is_err());
}
