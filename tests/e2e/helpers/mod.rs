use axum::Router;
use movie_taste_decider::{
    controllers::{favorites::FavoritesController, movie::MovieController, taste::TasteController},
    domain::taste::TasteEngine,
    infrastructure::{
        http::create_router,
        repositories::{FavoritesStore, OmdbMovieCatalog},
    },
};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub mod api_client;
pub mod omdb_mocks;

use api_client::TestClient;
use fixtures::TestFixtures;

pub struct TestContext {
    pub client: TestClient,
    pub omdb: MockServer,
    pub fixtures: TestFixtures,
    _tmp: TempDir,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            // Every test gets its own profile directory and OMDb stand-in
            let tmp = TempDir::new().expect("Failed to create temp dir");
            let profile_dir = tmp.path().join("profile");
            let omdb = MockServer::start().await;

            let app = create_app(profile_dir.clone(), &omdb);

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            let client = TestClient::new(&base_url);
            let fixtures = TestFixtures::new(profile_dir.clone());

            Self {
                client,
                omdb,
                fixtures,
                _tmp: tmp,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Temp dir and mock server are cleaned up on drop
        }
    }
}

fn create_app(profile_dir: PathBuf, omdb: &MockServer) -> Router {
    let favorites_store = Arc::new(FavoritesStore::new(Some(profile_dir)));
    let movie_catalog = Arc::new(OmdbMovieCatalog::new(
        omdb_mocks::TEST_API_KEY.to_string(),
        format!("{}/", omdb.uri()),
    ));
    let taste_engine = Arc::new(TasteEngine::new(movie_catalog, favorites_store));

    create_router(
        Arc::new(MovieController::new(taste_engine.clone())),
        Arc::new(FavoritesController::new(taste_engine.clone())),
        Arc::new(TasteController::new(taste_engine)),
    )
}
