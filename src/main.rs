mod allocator;

use hillcrypt::app::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::init()?;
    if let Err(error) = app.execute().await {
        hillcrypt::ui::show_failure(&error);
        std::process::exit(1);
    }
    Ok(())
}
