//! # boundary-map
//!
//! Génère une carte Leaflet statique (`map.html`) des limites
//! administratives d'une région fixe, à partir d'un extrait OSM.
//!
//! ## Pipeline
//!
//! Strictement séquentiel, une passe par run:
//!
//! 1. `fetch`: une requête synchrone vers l'API OSM 0.6 (boîte englobante
//!    fixe)
//! 2. `osm_xml::parse`: octets bruts → document structuré
//! 3. `render`: document → instructions de dessin (le cœur du système)
//! 4. `html`: instructions → fichier HTML autonome
//!
//! Chaque étape consomme la sortie de la précédente comme valeur
//! immuable; aucun état partagé entre étapes.

pub mod fetch;
pub mod html;
pub mod render;

pub use render::{draw_instructions, DrawInstruction};
