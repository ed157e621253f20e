use astra::Server;
use std::net::SocketAddr;

use jinka_yield::app::AppCtx;
use jinka_yield::config::Config;
use jinka_yield::responses::error_to_response;
use jinka_yield::router::handle;

fn main() {
    // 1️⃣ Resolve the configuration once, up front
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Bad BIND_ADDR '{}': {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    let ctx = AppCtx::new(config);

    // 2️⃣ Start the server
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the shared context into the closure
    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
