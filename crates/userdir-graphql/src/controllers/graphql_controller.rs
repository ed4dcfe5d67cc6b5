//! GraphQL endpoint and GraphiQL explorer.

use crate::state::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

/// Creates the GraphQL router. `GET` serves GraphiQL, `POST` executes.
pub fn router(path: &str) -> Router<AppState> {
    Router::new().route(path, get(graphiql).post(graphql_handler))
}

/// Executes a GraphQL request.
pub async fn graphql_handler(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

/// Serves the GraphiQL explorer pointed at the GraphQL endpoint.
pub async fn graphiql(State(state): State<AppState>) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(&state.graphql_path).finish())
}
