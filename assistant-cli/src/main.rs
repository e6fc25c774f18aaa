mod render;

use std::sync::Arc;

use anyhow::Result;
use literature_query::{HttpLiteratureSearch, QueryController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assistant_cli=info,literature_query=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let backend = Arc::new(HttpLiteratureSearch::from_env());
    let controller = QueryController::new(backend);

    info!("Symptom literature assistant starting");
    println!("Symptom literature assistant");
    println!("Describe your symptoms and press enter (:reset clears, :quit exits).");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        let command = line.trim();
        if command == ":quit" || command == ":q" {
            break;
        }
        if command == ":reset" {
            controller.reset().await;
            println!("{}", render::render(&controller.phase().await));
        } else {
            controller.update_input(line).await;
            if controller.can_submit().await {
                println!("{}", render::SEARCHING);
                controller.submit().await;
                println!("{}", render::render(&controller.phase().await));
            } else {
                println!("{}", render::IDLE_HINT);
            }
        }
        println!();
        prompt();
    }

    info!("Symptom literature assistant exiting");
    Ok(())
}

fn prompt() {
    use std::io::Write;
    print!("symptoms> ");
    let _ = std::io::stdout().flush();
}
