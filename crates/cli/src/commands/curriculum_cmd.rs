//! `mentor curriculum` — Show the curriculum the mentor is grounded with.

use mentor_config::AppConfig;
use mentor_curriculum::{Provenance, load_curriculum};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let loaded = load_curriculum(&config.curriculum).await;

    match &loaded.provenance {
        Provenance::Store { document_id, title } => {
            println!("Curriculum: {title} (document {document_id})\n");
        }
        Provenance::Fallback { reason } => {
            println!("Curriculum: built-in sample content ({reason})\n");
        }
    }

    println!("{}", loaded.text);
    Ok(())
}
