use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::fmt::Debug;

/// Sends a fully built request and hands back the raw response.
///
/// An `Err` means no response was obtained at all. Non-2xx statuses are
/// returned as `Ok`.
#[async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    async fn http_send(&self, req: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>>;
}

#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>> {
        let req = reqwest::Request::try_from(req)?;
        let resp = self.client.execute(req).await?;

        let mut builder = http::Response::builder().status(resp.status());
        if let Some(headers) = builder.headers_mut() {
            headers.extend(resp.headers().clone());
        }
        let body = resp.bytes().await?;

        Ok(builder.body(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accepts one connection, captures the raw request and answers with `response`.
    async fn serve_once(response: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            if name.eq_ignore_ascii_case("content-length") {
                                value.trim().parse::<usize>().ok()
                            } else {
                                None
                            }
                        })
                        .unwrap_or(0);
                    if raw.len() >= end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8(raw).unwrap()
        });

        (format!("http://{addr}"), handle)
    }

    #[tokio::test]
    async fn test_reqwest_http_send_round_trip() {
        let (base, server) = serve_once(
            "HTTP/1.1 422 Unprocessable Entity\r\ncontent-type: application/json\r\ncontent-length: 17\r\nconnection: close\r\n\r\n{\"success\":false}",
        )
        .await;

        let req = http::Request::post(format!("{base}/emails"))
            .header("X-HMAC-Timestamp", "1733135400000")
            .body(Bytes::from_static(b"{\"name\":\"a\"}"))
            .unwrap();
        let resp = ReqwestHttpSend::default().http_send(req).await.unwrap();

        assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(resp.body().as_ref(), b"{\"success\":false}");

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /emails HTTP/1.1\r\n"));
        assert!(raw.to_ascii_lowercase().contains("x-hmac-timestamp: 1733135400000"));
        assert!(raw.ends_with("{\"name\":\"a\"}"));
    }

    #[tokio::test]
    async fn test_reqwest_http_send_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let req = http::Request::post(format!("http://{addr}/emails"))
            .body(Bytes::new())
            .unwrap();

        assert!(ReqwestHttpSend::default().http_send(req).await.is_err());
    }
}
