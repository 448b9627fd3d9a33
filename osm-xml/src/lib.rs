//! # osm-xml
//!
//! Parser pour les extraits XML de l'API OSM 0.6 (éléments `node`, `way`,
//! `nd`, `tag`).
//!
//! ## Features
//!
//! - Modèle de document dérivé `serde` sur `quick-xml`
//! - Attributs copiés verbatim (identifiants et coordonnées en texte)
//! - Ordre de document préservé pour les nœuds, chemins, références et tags
//! - Parse pur: aucune I/O, aucun effet de bord
//!
//! ## Usage
//!
//! ```rust
//! let xml = br#"<osm><node id="1" lat="38.0" lon="32.0"/></osm>"#;
//! let document = osm_xml::parse(xml).unwrap();
//! assert_eq!(document.node.len(), 1);
//! ```

pub mod error;
pub mod types;

pub use error::OsmXmlError;
pub use types::{Nd, Node, Osm, Tag, Way};

use quick_xml::events::Event;
use quick_xml::{DeError, Reader};
use tracing::debug;

/// Parse un extrait OSM XML (API 0.6) et retourne le document structuré.
///
/// # Arguments
///
/// * `data` - Les octets bruts du document XML
///
/// # Returns
///
/// Un [`Osm`] reflétant chaque élément `node` et `way` présent, en ordre
/// de document, attributs copiés verbatim.
///
/// # Errors
///
/// Retourne [`OsmXmlError::MalformedDocument`] si le XML est malformé,
/// si l'élément racine n'est pas `osm`, ou si le contenu ne correspond
/// pas au schéma attendu. L'erreur remonte à l'appelant: pas de document
/// partiel, pas de document vide silencieux.
pub fn parse(data: &[u8]) -> Result<Osm, OsmXmlError> {
    check_root_element(data)?;

    let document: Osm = quick_xml::de::from_reader(data)?;
    debug!(
        nodes = document.node.len(),
        ways = document.way.len(),
        "OSM document parsed"
    );
    Ok(document)
}

/// Vérifie que l'élément racine du document est bien `osm`.
///
/// Le désérialiseur ne contrôle pas le nom de la racine: sans cette
/// vérification, un document bien formé mais étranger (racine `html`,
/// `gpx`, …) produirait un document vide au lieu d'une erreur.
fn check_root_element(data: &[u8]) -> Result<(), OsmXmlError> {
    let mut reader = Reader::from_reader(data);

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                if start.name().as_ref() == b"osm" {
                    return Ok(());
                }
                return Err(OsmXmlError::MalformedDocument(DeError::Custom(format!(
                    "expected root element `osm`, found `{}`",
                    String::from_utf8_lossy(start.name().as_ref())
                ))));
            }
            Ok(Event::Eof) => {
                return Err(OsmXmlError::MalformedDocument(DeError::Custom(
                    "expected root element `osm`, found end of document".to_string(),
                )))
            }
            Err(e) => {
                return Err(OsmXmlError::MalformedDocument(DeError::Custom(
                    e.to_string(),
                )))
            }
            // Déclaration XML, commentaires ou espaces avant la racine
            Ok(_) => continue,
        }
    }
}
