use anyhow::Result;

use genba::App;

#[tokio::main]
async fn main() -> Result<()> {
    let (settings, client) = genba_portal::connect()?;

    // Logging is initialized in App::run() with buffer support
    App::new(settings, client).run().await?;

    Ok(())
}
