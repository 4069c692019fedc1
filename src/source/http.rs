use super::SourceError;
use std::io::Read;
use std::time::Duration;

/// Overall timeout for a manifest download
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(120);

/// Client identification sent with every request; some providers only
/// serve playlists to known players
pub const USER_AGENT: &str = "VLC/3.0.12 LibVLC/3.0.12";

/// Download a manifest over HTTP(S)
///
/// HTTP error statuses and transport failures are both reported as
/// `SourceError::Http`; nothing partial is returned.
pub(super) fn download_manifest(url: &str) -> Result<String, SourceError> {
    log::info!("Downloading manifest from: {}", url);

    let agent = ureq::AgentBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build();

    let response = agent.get(url).call().map_err(|source| SourceError::Http {
        url: url.to_string(),
        source: Box::new(source),
    })?;

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|source| SourceError::Body {
            url: url.to_string(),
            source,
        })?;

    log::info!("Download complete ({} bytes)", body.len());
    Ok(String::from_utf8_lossy(&body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve one connection on localhost; `None` closes it without answering.
    /// The handle yields the raw request head.
    fn serve_once(response: Option<Vec<u8>>) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/list.m3u", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            if let Some(response) = response {
                stream.write_all(&response).unwrap();
            }
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    fn response(status: &str, body: &[u8]) -> Vec<u8> {
        let mut bytes = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        )
        .into_bytes();
        bytes.extend_from_slice(body);
        bytes
    }

    #[test]
    fn test_download_decodes_lossy_and_sends_user_agent() {
        let (url, server) = serve_once(Some(response("200 OK", b"#EXTM3U\n#EXTINF:-1,Caf\xe9\nhttp://a\n")));

        let text = download_manifest(&url).unwrap();
        let request = server.join().unwrap();

        assert!(text.starts_with("#EXTM3U"));
        assert!(text.contains('\u{FFFD}'));
        assert!(text.contains("http://a"));
        assert!(request
            .lines()
            .any(|line| line.eq_ignore_ascii_case(&format!("user-agent: {}", USER_AGENT))));
    }

    #[test]
    fn test_error_status_is_http_error() {
        let (url, server) = serve_once(Some(response("404 Not Found", b"")));

        let err = download_manifest(&url).unwrap_err();
        server.join().unwrap();

        match err {
            SourceError::Http { url: failed, source } => {
                assert_eq!(failed, url);
                assert!(matches!(*source, ureq::Error::Status(404, _)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_dropped_connection_is_transport_error() {
        let (url, server) = serve_once(None);

        let err = download_manifest(&url).unwrap_err();
        server.join().unwrap();

        match err {
            SourceError::Http { source, .. } => {
                assert!(matches!(*source, ureq::Error::Transport(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
