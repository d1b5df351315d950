use anyhow::Result;
use prbot_core::config::Config;

/// Bind the listener, print where we are, and serve until ctrl-c.
pub fn run(config: Config, port: u16) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();

        println!("prbot → http://localhost:{actual_port}/github/payload");

        tokio::select! {
            res = prbot_server::serve_on(config, listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
