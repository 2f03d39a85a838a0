mod api;
mod builder;
mod common;
mod cricket;
mod error;
mod football;
mod landing;
mod routes;
mod views;

pub use error::{ApiError, ApiResult};
pub use routes::ServerRoutes;

use axum::response::IntoResponse;
use lineup::{PlayerSource, ScreenSession, Sport};
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LineupServer {
    data: LineupAppData,
    port: u16,
}

impl LineupServer {
    pub fn new(data: LineupAppData, port: u16) -> Self {
        LineupServer { data, port }
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://localhost:{}", self.port);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            return Err(e);
        }

        Ok(())
    }
}

/// The two builder screens served by this process. Each screen exists once
/// and is shared by every browser that opens it.
pub struct LineupAppData {
    pub cricket: Arc<ScreenSession>,
    pub football: Arc<ScreenSession>,
    pub show_search_errors: bool,
}

impl LineupAppData {
    pub fn new(source: Arc<dyn PlayerSource>, debounce: Duration, show_search_errors: bool) -> Self {
        LineupAppData {
            cricket: Arc::new(ScreenSession::with_debounce(
                Sport::Cricket,
                Arc::clone(&source),
                debounce,
            )),
            football: Arc::new(ScreenSession::with_debounce(Sport::Football, source, debounce)),
            show_search_errors,
        }
    }

    pub fn session(&self, sport: Sport) -> &ScreenSession {
        match sport {
            Sport::Cricket => &self.cricket,
            Sport::Football => &self.football,
        }
    }
}

impl Clone for LineupAppData {
    fn clone(&self) -> Self {
        LineupAppData {
            cricket: Arc::clone(&self.cricket),
            football: Arc::clone(&self.football),
            show_search_errors: self.show_search_errors,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response};
    use axum::Router;
    use futures::future::BoxFuture;
    use lineup::{SearchError, SearchResultItem};
    use tower::ServiceExt;

    /// Returns two players for every query after a short delay.
    pub struct StubSource;

    impl PlayerSource for StubSource {
        fn search<'a>(
            &'a self,
            query: &'a str,
        ) -> BoxFuture<'a, Result<Vec<SearchResultItem>, SearchError>> {
            Box::pin(async move {
                tokio::time::sleep(Duration::from_millis(20)).await;

                Ok(vec![
                    SearchResultItem {
                        external_id: Some("1".to_string()),
                        name: Some(format!("{} One", query)),
                        thumb: Some("https://img/one.jpg".to_string()),
                        team: Some("First XI".to_string()),
                    },
                    SearchResultItem {
                        external_id: Some("2".to_string()),
                        name: Some(format!("{} Two", query)),
                        thumb: None,
                        team: None,
                    },
                ])
            })
        }
    }

    pub fn app_data() -> LineupAppData {
        LineupAppData::new(Arc::new(StubSource), Duration::from_millis(500), false)
    }

    pub fn router(data: &LineupAppData) -> Router {
        ServerRoutes::create().with_state(data.clone())
    }

    pub async fn send(data: &LineupAppData, request: Request<Body>) -> Response<Body> {
        router(data).oneshot(request).await.unwrap()
    }

    pub async fn body_text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    pub fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }
}
