//! Résolution géométrique: du document OSM aux instructions de dessin
//!
//! Le cœur du système: un marqueur par nœud, et un polygone par chemin
//! retenu par le prédicat de sélection, anneau résolu via un index
//! id → nœud construit une fois par document.

use std::collections::HashMap;

use osm_xml::{Node, Osm, Way};
use tracing::debug;

/// Couleur fixe des polygones de limites administratives
pub const POLYGON_COLOR: &str = "blue";

/// Une instruction de dessin consommée par l'émetteur HTML
///
/// Les coordonnées sont le texte verbatim du document source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawInstruction {
    /// Un marqueur ponctuel, un par nœud du document
    Marker { lat: String, lon: String },

    /// Un anneau ordonné de coordonnées avec sa couleur de tracé
    Polygon {
        ring: Vec<(String, String)>,
        color: &'static str,
    },
}

/// Prédicat de sélection: le chemin devient un polygone ssi son premier
/// tag porte la valeur littérale `administrative`.
///
/// Limitation connue: la règle est positionnelle (seul le premier tag est
/// consulté), alors que l'idiome OSM serait une recherche par clé
/// `boundary=administrative` (l'ordre des tags n'est pas porteur de sens
/// dans les données source). Le comportement est reproduit tel quel; un
/// chemin dont un tag ultérieur vaut `administrative` n'est PAS retenu.
/// Un chemin sans tag n'est jamais retenu (pas d'accès hors bornes).
fn is_administrative_boundary(way: &Way) -> bool {
    way.tag.first().map_or(false, |tag| tag.v == "administrative")
}

/// Produit la liste ordonnée des instructions de dessin pour un document.
///
/// Un [`DrawInstruction::Marker`] par nœud (ordre de document), puis un
/// [`DrawInstruction::Polygon`] par chemin sélectionné (ordre de document).
///
/// La résolution des références `nd` passe par un index id → nœud, O(1)
/// par référence là où le balayage naïf coûte O(refs × nœuds). Les
/// références sans nœud correspondant dans le document sont simplement
/// omises de l'anneau, jamais une erreur. Un anneau vide ou dégénéré
/// (moins de 3 points) est émis tel quel, sans validation de taille.
pub fn draw_instructions(document: &Osm) -> Vec<DrawInstruction> {
    let node_by_id: HashMap<&str, &Node> = document
        .node
        .iter()
        .map(|node| (node.id.as_str(), node))
        .collect();

    let mut instructions = Vec::with_capacity(document.node.len());

    for node in &document.node {
        instructions.push(DrawInstruction::Marker {
            lat: node.lat.clone(),
            lon: node.lon.clone(),
        });
    }

    for way in document.way.iter().filter(|way| is_administrative_boundary(way)) {
        let ring: Vec<(String, String)> = way
            .nd
            .iter()
            .filter_map(|nd| node_by_id.get(nd.reference.as_str()))
            .map(|node| (node.lat.clone(), node.lon.clone()))
            .collect();

        instructions.push(DrawInstruction::Polygon {
            ring,
            color: POLYGON_COLOR,
        });
    }

    debug!(
        markers = document.node.len(),
        polygons = instructions.len() - document.node.len(),
        "draw instructions built"
    );

    instructions
}
