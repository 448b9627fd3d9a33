//! Types de données pour le crate osm-xml
//!
//! Les coordonnées (`lat`, `lon`) et les identifiants sont conservés en
//! texte, copiés verbatim depuis les attributs XML. Pas de conversion
//! flottante: les valeurs ressortent exactement comme elles sont entrées,
//! sans dérive de précision ni de format.

use serde::Deserialize;

/// Un nœud OSM: un point géographique identifié
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    /// Identifiant, unique au sein d'un document
    #[serde(rename = "@id")]
    pub id: String,

    /// Latitude en degrés décimaux (texte verbatim)
    #[serde(rename = "@lat")]
    pub lat: String,

    /// Longitude en degrés décimaux (texte verbatim)
    #[serde(rename = "@lon")]
    pub lon: String,
}

/// Une référence ordonnée vers un nœud (élément `nd` d'un chemin)
///
/// La référence n'est pas forcément résoluble: un extrait découpé par
/// boîte englobante peut référencer des nœuds hors extrait.
#[derive(Debug, Clone, Deserialize)]
pub struct Nd {
    #[serde(rename = "@ref")]
    pub reference: String,
}

/// Une annotation clé/valeur attachée à un chemin
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    #[serde(rename = "@k")]
    pub k: String,

    #[serde(rename = "@v")]
    pub v: String,
}

/// Un chemin OSM: une séquence ordonnée de références de nœuds plus ses tags
#[derive(Debug, Clone, Deserialize)]
pub struct Way {
    #[serde(rename = "@id")]
    pub id: String,

    /// Références de nœuds, dans l'ordre du document
    #[serde(default)]
    pub nd: Vec<Nd>,

    /// Tags, dans l'ordre du document (les clés peuvent se répéter)
    #[serde(default)]
    pub tag: Vec<Tag>,
}

/// Un document OSM complet: l'extrait parsé, nœuds et chemins en ordre
/// de document
///
/// Les éléments non modélisés (`relation`, `bounds`, attributs de version,
/// tags portés par les nœuds, …) sont ignorés au parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Osm {
    #[serde(default)]
    pub node: Vec<Node>,

    #[serde(default)]
    pub way: Vec<Way>,
}
