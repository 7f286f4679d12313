#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use powersolve::{Engine, Solution};
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tracing::{error, info};

    /// Loaded once at startup; requests only read it
    type SharedEngine = Arc<Engine>;

    #[derive(Debug, Deserialize)]
    struct SolveRequest {
        code: String,
        /// Solve only this puzzle; all puzzles in `code` otherwise
        #[serde(default)]
        puzzle: Option<String>,
    }

    #[derive(Debug, Serialize)]
    struct SolveResponse {
        results: Vec<PuzzleResult>,
    }

    #[derive(Debug, Serialize)]
    struct PuzzleResult {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        solution: Option<Solution>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    type ApiError = (StatusCode, Json<ErrorResponse>);

    fn api_error(status: StatusCode, message: String) -> ApiError {
        (status, Json(ErrorResponse { error: message }))
    }

    pub fn router(engine: Engine) -> Router {
        let shared_engine: SharedEngine = Arc::new(engine);

        Router::new()
            .route("/health", get(health_check))
            .route("/solve/:puzzle_name", get(solve_get))
            .route("/solve", post(solve_post))
            .layer(CorsLayer::permissive())
            .with_state(shared_engine)
    }

    pub async fn start_server(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
        let app = router(engine);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Powersolve server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "powersolve",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn solve_get(
        State(engine): State<SharedEngine>,
        Path(puzzle_name): Path<String>,
    ) -> Result<Json<Solution>, ApiError> {
        if engine.get_puzzle(&puzzle_name).is_none() {
            return Err(api_error(
                StatusCode::NOT_FOUND,
                format!("Puzzle '{}' not found", puzzle_name),
            ));
        }

        let solution = engine.solve(&puzzle_name).map_err(|e| {
            error!("Solving '{}' failed: {}", puzzle_name, e);
            api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        })?;

        info!(
            "Solved puzzle '{}' with {} letters",
            puzzle_name,
            solution.letters.len()
        );
        Ok(Json(solution))
    }

    async fn solve_post(
        Json(payload): Json<SolveRequest>,
    ) -> Result<Json<SolveResponse>, ApiError> {
        if payload.code.trim().is_empty() {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "Code cannot be empty".to_string(),
            ));
        }

        let mut temp_engine = Engine::new();
        temp_engine
            .add_puzzle_code(&payload.code, "<request>")
            .map_err(|e| {
                error!("Failed to load puzzle code: {}", e);
                api_error(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to load puzzle code: {}", e),
                )
            })?;

        let names = match payload.puzzle {
            Some(name) => {
                if temp_engine.get_puzzle(&name).is_none() {
                    return Err(api_error(
                        StatusCode::NOT_FOUND,
                        format!("Puzzle '{}' not found in provided code", name),
                    ));
                }
                vec![name]
            }
            None => temp_engine.list_puzzles(),
        };

        if names.is_empty() {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "No puzzle found in provided code".to_string(),
            ));
        }

        let results: Vec<PuzzleResult> = names
            .into_iter()
            .map(|name| match temp_engine.solve(&name) {
                Ok(solution) => PuzzleResult {
                    name,
                    solution: Some(solution),
                    error: None,
                },
                Err(e) => PuzzleResult {
                    name,
                    solution: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();

        info!("Solved {} inline puzzle(s)", results.len());
        Ok(Json(SolveResponse { results }))
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _engine: powersolve::Engine,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
