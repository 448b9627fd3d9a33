//! Récupération de l'extrait OSM: une requête synchrone unique
//!
//! Le reste du pipeline ne consomme que les octets retournés; il est
//! agnostique du transport et de la boîte englobante utilisée.

use std::io::Read;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

/// Boîte englobante fixe de la région (min_lon,min_lat,max_lon,max_lat):
/// le beylicat de Karaman et ses environs
pub const BOUNDING_BOX: &str = "31.0,37.0,33.0,39.0";

const API_URL: &str = "https://api.openstreetmap.org/api/0.6/map";

// Borne la seule opération bloquante du pipeline; sans effet sur la
// sortie en cas de succès.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Erreurs pouvant survenir lors de la récupération de l'extrait
///
/// Toutes sont fatales pour le run courant: pas de retry, pas de repli.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Statut HTTP non-2xx renvoyé par le serveur
    #[error("server answered with status {code}")]
    Status { code: u16 },

    /// Échec au niveau transport (DNS, connexion, TLS, timeout)
    #[error("transport failure: {0}")]
    Transport(String),

    /// Échec de lecture du corps de la réponse
    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ureq::Error> for FetchError {
    fn from(value: ureq::Error) -> Self {
        match value {
            ureq::Error::Status(code, _) => FetchError::Status { code },
            ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
        }
    }
}

/// Récupère l'extrait OSM de la boîte englobante auprès de l'API 0.6.
///
/// # Errors
///
/// Retourne [`FetchError`] sur statut non-2xx ou échec transport/lecture.
pub fn fetch_map_data(bbox: &str) -> Result<Vec<u8>, FetchError> {
    let url = format!("{}?bbox={}", API_URL, bbox);
    info!(url = %url, "fetching OSM extract");
    fetch_url(&url)
}

fn fetch_url(url: &str) -> Result<Vec<u8>, FetchError> {
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();

    let response = agent.get(url).call()?;

    let mut body = Vec::new();
    response.into_reader().read_to_end(&mut body)?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Sert une unique réponse HTTP canned sur une socket loopback
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });

        format!("http://{}/api/0.6/map?bbox=31.0,37.0,33.0,39.0", addr)
    }

    #[test]
    fn test_non_success_status_is_a_fetch_error() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        );

        let result = fetch_url(&url);

        assert!(matches!(result, Err(FetchError::Status { code: 500 })));
    }

    #[test]
    fn test_success_returns_body_bytes() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 11\r\nconnection: close\r\n\r\n<osm></osm>",
        );

        let body = fetch_url(&url).unwrap();

        assert_eq!(body, b"<osm></osm>");
    }

    #[test]
    fn test_connection_refused_is_a_transport_error() {
        // Port réservé puis refermé: la connexion doit échouer
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = fetch_url(&format!("http://{}/", addr));

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
