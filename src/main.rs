mod error;
mod llm;
mod panels;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::chat::{ChatConfig, ChatResponder};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let llm_config = llm::config::LlmConfig::from_env();
    let generator = llm::GeminiClient::new(llm_config).expect("LLM HTTP client build failed");
    let model = generator.model().to_string();
    let chat_config = ChatConfig::from_env().expect("invalid CHAT_PERSONA");
    let responder = ChatResponder::new(chat_config, Arc::new(generator));

    // Missing key is non-fatal: the panel catalog still works, chat calls fail fast.
    if responder.is_configured() {
        tracing::info!(%model, persona = %responder.persona(), "chat assistant configured");
    } else {
        tracing::warn!("GEMINI_API_KEY not set; chat requests will fail until restart");
    }

    let state = state::AppState::new(responder);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "zelearn listening");
    axum::serve(listener, app).await.expect("server failed");
}
