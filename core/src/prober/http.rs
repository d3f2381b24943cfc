//! Plain **HTTP** prober.
//!
//! Sends a bare `GET http://<address>/` and reports the status line of whatever
//! answers. Redirects are returned as-is rather than followed, and the body is
//! read to the end so a server stalling mid-response still counts against the
//! timeout.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, redirect::Policy};
use sweepr_common::debug;
use sweepr_common::error::FailureReason;
use sweepr_common::probe::{Address, ProbeResult};
use tokio::time::timeout;

use super::Prober;

pub struct HttpProber {
    client: Client,
    timeout: Duration,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .redirect(Policy::none())
            .no_proxy()
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, timeout })
    }

    async fn fetch_status(&self, url: &str) -> Result<u16, FailureReason> {
        let response = self.client.get(url).send().await.map_err(classify_error)?;
        let status = response.status().as_u16();
        response.bytes().await.map_err(classify_error)?;
        Ok(status)
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, address: &Address) -> ProbeResult {
        let url = address.url();

        let result = match timeout(self.timeout, self.fetch_status(&url)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(FailureReason::Timeout),
        };

        if let Err(reason) = &result {
            debug!("{url}: {reason}");
        }

        result.map_err(Into::into)
    }
}

fn classify_error(err: reqwest::Error) -> FailureReason {
    if err.is_timeout() {
        FailureReason::Timeout
    } else if err.is_connect() {
        FailureReason::Connect
    } else {
        FailureReason::Request(err.to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use sweepr_common::error::ProbeError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn respond_once(status_line: &'static str, headers: &'static str) -> Address {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\n{headers}Content-Length: 0\r\nConnection: close\r\n\r\n"
            );
            let _ = stream.write_all(response.as_bytes()).await;
        });

        Address::new(addr.to_string())
    }

    #[tokio::test]
    async fn reports_status_of_responding_host() {
        let address = respond_once("200 OK", "").await;
        let prober = HttpProber::new(Duration::from_secs(2)).unwrap();
        assert_eq!(prober.probe(&address).await, Ok(200));
    }

    #[tokio::test]
    async fn redirect_is_reported_not_followed() {
        let address = respond_once("301 Moved Permanently", "Location: http://192.0.2.1/\r\n").await;
        let prober = HttpProber::new(Duration::from_secs(2)).unwrap();
        assert_eq!(prober.probe(&address).await, Ok(301));
    }

    #[tokio::test]
    async fn silent_host_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(stream);
        });

        let prober = HttpProber::new(Duration::from_millis(200)).unwrap();
        let address = Address::new(addr.to_string());
        assert_eq!(
            prober.probe(&address).await,
            Err(ProbeError::Failure(FailureReason::Timeout))
        );
    }

    #[tokio::test]
    async fn closed_port_is_a_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let prober = HttpProber::new(Duration::from_secs(2)).unwrap();
        let result = prober.probe(&Address::new(addr.to_string())).await;
        assert!(matches!(result, Err(ProbeError::Failure(_))), "got {result:?}");
    }

    #[tokio::test]
    async fn unparsable_address_is_a_failure() {
        let prober = HttpProber::new(Duration::from_secs(2)).unwrap();
        let result = prober.probe(&Address::from("not a host")).await;
        assert!(matches!(result, Err(ProbeError::Failure(_))), "got {result:?}");
    }
}
