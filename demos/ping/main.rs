use std::time::Duration;

use ping_rtt::{EchoSession, EchoSessionConfig, GenericError};

#[derive(argh::FromArgs)]
/// ping - send ICMP ECHO_REQUEST to a host (needs raw socket privileges)
struct Args {
    #[argh(option, short = 'c')]
    /// stop after <count> sent ping messages
    count: Option<u32>,

    #[argh(option, short = 's', default = "56")]
    /// number of payload bytes to send
    size: usize,

    #[argh(option, short = 'W')]
    /// seconds to wait for a reply (waits forever if not given)
    timeout: Option<u64>,

    #[argh(positional)]
    /// host name or IP address
    host: String,
}

fn main() -> Result<(), GenericError> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args: Args = argh::from_env();

    let ip = ping_rtt::resolve(&args.host)?;
    let config = EchoSessionConfig { timeout: args.timeout.map(Duration::from_secs), ..EchoSessionConfig::default() };
    let session = EchoSession::new(config);

    println!("PING {} ({ip}) {} data bytes", args.host, args.size);
    let mut sent = 0u32;
    loop {
        match session.ping(ip, args.size) {
            Ok(response) => match response.packet_len {
                Ok(n) => println!(
                    "{n} bytes from {ip}: icmp_seq={} time={:?}",
                    session.last_sequence_number(),
                    response.time
                ),
                Err(e) => println!("0 bytes from {ip}: {e}"),
            },
            Err(e) => {
                tracing::error!("{e}");
                if e.is_permission_denied() {
                    return Err(e.into());
                }
            }
        }
        sent += 1;
        if args.count.is_some_and(|count| sent >= count) {
            break;
        }
        std::thread::sleep(Duration::from_secs(1));
    }

    Ok(())
}
