#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::{Query, State},
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use mathler::{Engine, PuzzleInfo, ScoreResult};
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;
    use tracing::{debug, info};

    type SharedEngine = Arc<Engine>;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct GuessRequest {
        guess: Vec<String>,
        target_value: i64,
    }

    #[derive(Debug, Deserialize)]
    struct PuzzleQuery {
        difficulty: Option<u32>,
    }

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct PuzzleStats {
        count: usize,
        equation_length: usize,
        difficulties: Vec<u32>,
    }

    pub fn router(engine: Engine) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/api/puzzle", get(random_puzzle))
            .route("/api/puzzles/count", get(puzzle_stats))
            .route("/api/check", post(check_guess))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(Arc::new(engine))
    }

    pub async fn start_server(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
        let app = router(engine);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Mathler server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "mathler",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn random_puzzle(
        State(engine): State<SharedEngine>,
        Query(query): Query<PuzzleQuery>,
    ) -> Json<PuzzleInfo> {
        let pick = |n: usize| rand::random_range(0..n);
        let puzzle = match query.difficulty {
            Some(difficulty) => engine.puzzle_by_difficulty(difficulty, pick),
            None => engine.random_puzzle(pick),
        };

        debug!(
            target_value = puzzle.target_value,
            difficulty = puzzle.difficulty,
            "Served puzzle"
        );
        Json(puzzle)
    }

    async fn puzzle_stats(State(engine): State<SharedEngine>) -> Json<PuzzleStats> {
        let puzzles = engine.puzzles();
        Json(PuzzleStats {
            count: puzzles.len(),
            equation_length: puzzles.equation_length(),
            difficulties: puzzles.difficulties(),
        })
    }

    async fn check_guess(
        State(engine): State<SharedEngine>,
        Json(request): Json<GuessRequest>,
    ) -> Json<ScoreResult> {
        let result = engine.check_guess(&request.guess, request.target_value);

        info!(
            target_value = request.target_value,
            valid = result.valid,
            solved = result.solved,
            "Checked guess"
        );

        Json(result)
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _engine: mathler::Engine,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
