use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header::{AUTHORIZATION, CONTENT_TYPE}, HeaderName, HeaderValue, Method, StatusCode},
    middleware,
    response::{Html, IntoResponse},
    routing::{get, post},
    Extension, Router,
};
use dotenvy::dotenv;
use sea_orm::Database;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invgraph::auth::{optional_auth_middleware, AuthenticatedUser, JwtService};
use invgraph::config::AppConfig;
use invgraph::ent::{migrate, Client};
use invgraph::graphql::{create_schema, ApiSchema};
use invgraph::hooks::default_hooks;

#[derive(Clone)]
struct AppState {
    schema: ApiSchema,
    client: Client,
    development: bool,
}

async fn graphql_handler(
    State(state): State<AppState>,
    Extension(user): Extension<Option<AuthenticatedUser>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    // Mutations made during this request are attributed to the viewer.
    let client = state.client.clone().with_viewer(user.as_ref().map(|u| u.id));
    if let Some(user) = user {
        request = request.data(user);
    }
    request = request.data(client);

    state.schema.execute(request).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>invgraph GraphQL Playground</title>
        <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/graphql-playground-react/build/static/css/index.css" />
    </head>
    <body>
        <div id="root"></div>
        <script src="https://cdn.jsdelivr.net/npm/graphql-playground-react/build/static/js/middleware.js"></script>
        <script>
            GraphQLPlayground.init(document.getElementById('root'), {
                endpoint: '/graphql'
            })
        </script>
    </body>
    </html>
    "#)
}

async fn health() -> impl IntoResponse {
    "OK"
}

async fn graphql_schema(State(state): State<AppState>) -> impl IntoResponse {
    if !state.development {
        return (StatusCode::NOT_FOUND, "Schema not available in production").into_response();
    }

    (
        [(CONTENT_TYPE, "application/graphql")],
        state.schema.sdl(),
    )
        .into_response()
}

fn cors_layer(origins: &str) -> CorsLayer {
    if origins.trim() == "*" {
        warn!("CORS set to accept ANY origin (*) - only use in development!");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("apollo-require-preflight"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invgraph=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    info!("Starting invgraph in {} environment", config.environment);

    info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    info!("Database connected successfully");

    if config.is_development() {
        migrate::create_all(&db).await?;
        info!("Development schema is up to date");
    }

    let client = Client::new(db)
        .with_hooks(default_hooks())
        .with_timeout(config.db_operation_timeout);
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

    let state = AppState {
        schema: create_schema(client.clone()),
        client,
        development: config.is_development(),
    };

    let app = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/playground", get(graphql_playground))
        .route("/health", get(health))
        .route("/schema.graphql", get(graphql_schema))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(middleware::from_fn_with_state(jwt_service, optional_auth_middleware))
        .with_state(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server starting on http://{}", addr);
    info!("GraphQL Playground available at http://{}/playground", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
