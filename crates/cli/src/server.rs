use hickory_server::server::RequestHandler;
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

const TCP_TIMEOUT: Duration = Duration::from_secs(10);

/// Binds UDP and TCP on the same address and serves DNS until the
/// server future resolves.
pub async fn start_dns_server<H: RequestHandler>(
    bind_addr: String,
    handler: H,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    let tcp_listener = TcpListener::bind(socket_addr).await?;

    info!(bind_address = %socket_addr, "DNS server listening (udp/tcp)");

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, TCP_TIMEOUT);

    server.block_until_done().await?;
    Ok(())
}
