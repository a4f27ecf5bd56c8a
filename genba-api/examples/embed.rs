use genba_api::{Client, GenbaApiError, Request};
use secrecy::SecretString;

#[tokio::main]
pub async fn main() -> Result<(), GenbaApiError> {
    let embedder = Client::new(
        "https://embed.example.com",
        &SecretString::from("embed_token".to_string()),
    );
    let index = Client::with_api_key(
        "https://db.example.com/rest/v1",
        &SecretString::from("service_key".to_string()),
    )?;

    let embedded = embedder
        .send(Request::embeddings().embed("現場事務所 電気代"))
        .await?;

    let rows = index
        .send(Request::account_titles().match_topk(embedded.embedding))
        .await?;

    for row in rows {
        println!("{} ({}%)", row.account_name, row.similarity_percent());
    }
    Ok(())
}
