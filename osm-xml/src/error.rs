//! Types d'erreurs pour le crate osm-xml

use thiserror::Error;

/// Erreurs pouvant survenir lors du parsing d'un extrait OSM
#[derive(Debug, Error)]
pub enum OsmXmlError {
    /// Document XML malformé ou schéma inattendu
    ///
    /// Fatal pour le run courant: un document partiellement parsé
    /// produirait une carte où des entités manquent silencieusement.
    #[error("malformed OSM document: {0}")]
    MalformedDocument(#[from] quick_xml::DeError),
}
