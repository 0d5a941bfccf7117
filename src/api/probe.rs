//! One-shot reachability probe for track URLs.

use thiserror::Error;

use super::models::ProbeResult;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("{0}")]
    Transport(String),
}

/// Issue a single no-cache GET against `url`. Never fails: transport errors
/// are folded into the returned record.
#[cfg(target_arch = "wasm32")]
pub async fn probe_url(url: &str) -> ProbeResult {
    fold_outcome(fetch_status(url).await)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn probe_url(url: &str) -> ProbeResult {
    probe_url_with(&reqwest::Client::new(), url).await
}

/// Same as [`probe_url`] with a caller-supplied HTTP client.
#[cfg(not(target_arch = "wasm32"))]
pub async fn probe_url_with(client: &reqwest::Client, url: &str) -> ProbeResult {
    fold_outcome(fetch_status_with(client, url).await)
}

fn fold_outcome(outcome: Result<(u16, String), ProbeError>) -> ProbeResult {
    match outcome {
        Ok((status, resolved)) => ProbeResult::from_response(status, resolved),
        Err(err) => ProbeResult::failed(err.to_string()),
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_status(url: &str) -> Result<(u16, String), ProbeError> {
    let response = gloo_net::http::Request::get(url)
        .cache(web_sys::RequestCache::NoCache)
        .send()
        .await
        .map_err(|e| ProbeError::Transport(e.to_string()))?;
    let resolved = response.url();
    Ok((
        response.status(),
        if resolved.is_empty() {
            url.to_string()
        } else {
            resolved
        },
    ))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_status_with(
    client: &reqwest::Client,
    url: &str,
) -> Result<(u16, String), ProbeError> {
    let response = client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-cache")
        .header(reqwest::header::PRAGMA, "no-cache")
        .send()
        .await
        .map_err(|e| ProbeError::Transport(e.to_string()))?;
    Ok((response.status().as_u16(), response.url().to_string()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn local_client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    /// Serve exactly one request with the given status line and return the
    /// request head that was received.
    async fn serve_once(status_line: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let read = socket.read(&mut buf).await.unwrap();
            let head = String::from_utf8_lossy(&buf[..read]).to_string();
            let reply = format!(
                "HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            head
        });
        (format!("http://{addr}"), handle)
    }

    #[tokio::test]
    async fn not_found_is_recorded_with_status() {
        let (base, server) = serve_once("404 Not Found").await;
        let url = format!("{base}/music/missing.mp3");

        let result = probe_url_with(&local_client(), &url).await;

        assert!(!result.ok);
        assert_eq!(result.status, Some(404));
        assert_eq!(result.url.as_deref(), Some(url.as_str()));
        assert!(result.error.is_none());

        let head = server.await.unwrap().to_ascii_lowercase();
        assert!(head.starts_with("get /music/missing.mp3"));
        assert!(head.contains("cache-control: no-cache"));
    }

    #[tokio::test]
    async fn success_status_is_ok() {
        let (base, server) = serve_once("200 OK").await;
        let url = format!("{base}/music/present.mp3");

        let result = probe_url_with(&local_client(), &url).await;

        assert!(result.ok);
        assert_eq!(result.status, Some(200));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn refused_connection_becomes_error_record() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = probe_url_with(&local_client(), &format!("http://{addr}/a.mp3")).await;

        assert!(!result.ok);
        assert_eq!(result.status, None);
        assert!(result.error.is_some());
    }

    #[tokio::test]
    async fn malformed_url_is_not_a_panic() {
        let result = probe_url("not a url").await;
        assert!(!result.ok);
        assert!(result.error.is_some());
    }
}
