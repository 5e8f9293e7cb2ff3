use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;

mod catalog;
mod config;
mod domain;
mod errors;
mod format;
mod responses;
mod router;
mod templates;
mod theme;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Read config from args, the environment and .env
    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => e.exit(),
    };

    // 2️⃣ Load the shoe catalog
    let catalog = match Catalog::load(&cfg.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    if catalog.is_empty() {
        eprintln!("⚠️ Catalog {} has no shoes", cfg.catalog_path.display());
    }

    // 3️⃣ Start the server
    println!(
        "Starting server at http://{} with {} shoes",
        cfg.addr,
        catalog.len()
    );

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    // 4️⃣ Serve requests, passing the catalog and config into the closure
    let result = server.serve(move |req, _info| match handle(req, &catalog, &cfg) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
