//! `reqwest`-backed catalog client.

use super::{CatalogApi, CatalogError};
use crate::model::{Product, ProductId, Stock};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the stock/product HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Creates a client rooted at `base_url`. Every request gives up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Uses an already configured client, e.g. one with custom proxy or TLS settings.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for an API path such as `stock/1`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.endpoint(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| {
            if source.is_decode() {
                CatalogError::Decode {
                    path: path.to_string(),
                    source,
                }
            } else {
                CatalogError::Http(source)
            }
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    #[instrument(skip(self))]
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        self.get_json(&format!("stock/{}", id.0)).await
    }

    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_json(&format!("products/{}", id.0)).await
    }
}

/// One-route HTTP server answering every request with a fixed response.
#[cfg(test)]
pub(crate) mod stub {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Catalog client for a stub, bypassing any proxy configured in the environment.
    pub fn catalog(base_url: String) -> super::HttpCatalog {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        super::HttpCatalog::with_client(base_url, client)
    }

    /// Serves `status` (e.g. `"404 Not Found"`) with `body` and returns the base URL.
    pub async fn serve(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{addr}")
    }
}

#[cfg(test)]
mod tests {
    use super::stub::catalog;
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let catalog = HttpCatalog::new("http://localhost:3333/", Duration::from_secs(1)).unwrap();
        assert_eq!(catalog.endpoint("stock/1"), "http://localhost:3333/stock/1");
        assert_eq!(
            catalog.endpoint("/products/7"),
            "http://localhost:3333/products/7"
        );
    }

    #[tokio::test]
    async fn test_stock_and_product_decode() {
        let stock = catalog(stub::serve("200 OK", r#"{"id":1,"amount":3}"#).await)
            .stock(ProductId(1))
            .await
            .unwrap();
        assert_eq!(stock, Stock::new(ProductId(1), 3));

        let product = catalog(stub::serve("200 OK", r#"{"id":1,"name":"Tênis","price":10}"#).await)
            .product(ProductId(1))
            .await
            .unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.price(), Some(10.0));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let base = stub::serve("404 Not Found", "{}").await;
        let err = catalog(base).stock(ProductId(1)).await.unwrap_err();
        assert!(
            matches!(err, CatalogError::Status { ref path, status: 404 } if path == "stock/1"),
            "{err}"
        );
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_decode_errors() {
        for body in ["not json", r#"{"id":1}"#, r#"{"amount":"many"}"#] {
            let err = catalog(stub::serve("200 OK", body).await)
                .stock(ProductId(1))
                .await
                .unwrap_err();
            assert!(matches!(err, CatalogError::Decode { .. }), "{body}: {err}");
        }

        let err = catalog(stub::serve("200 OK", r#"{"title":"no id"}"#).await)
            .product(ProductId(1))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }), "{err}");
    }

    #[tokio::test]
    async fn test_closed_port_is_an_http_error() {
        // Bind to get a free port, then release it so nothing is listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = catalog(format!("http://{addr}"))
            .stock(ProductId(1))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Http(_)), "{err}");
    }
}
