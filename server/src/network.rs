//! UDP request/response transport.
//!
//! One bincode-encoded datagram per request and per response. Requests are
//! dispatched sequentially, so each action is a complete read-modify-write
//! cycle before the next one starts.

use log::{debug, info, warn};
use tokio::net::UdpSocket;

use runequest_shared::Request;

use crate::persistence::PlayerStore;
use crate::service::GameService;

/// Maximum datagram size; catalog dumps stay well under this
const MAX_PACKET_SIZE: usize = 16 * 1024;

/// Serve requests on the socket until the process is stopped
pub async fn run<S: PlayerStore>(
    socket: UdpSocket,
    service: GameService<S>,
) -> std::io::Result<()> {
    info!("Listening on {}", socket.local_addr()?);
    let mut buf = vec![0u8; MAX_PACKET_SIZE];

    loop {
        // No request is fatal to the process
        let (len, addr) = match socket.recv_from(&mut buf).await {
            Ok(received) => received,
            Err(e) => {
                warn!("Receive error: {}", e);
                continue;
            }
        };

        let request = match Request::deserialize(&buf[..len]) {
            Ok(request) => request,
            Err(e) => {
                warn!("Malformed request from {}: {}", addr, e);
                continue;
            }
        };
        debug!("{} -> {:?}", addr, request);

        let response = service.handle(request).await;
        if let Err(e) = socket.send_to(&response.serialize(), addr).await {
            warn!("Failed to send response to {}: {}", addr, e);
        }
    }
}
