#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    equity_research_web::server::run().await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    use equity_research_web::App;
    use leptos::mount::mount_to_body;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(App);
}
