use dunehd_player::{DunePlayer, LoggingMode, PlayerConfig, PlayerState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dunehd_player::init_logging(LoggingMode::Development)?;

    let host = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DUNEHD_HOST").ok())
        .ok_or("usage: poll_status <host>  (or set DUNEHD_HOST)")?;

    println!("1. Creating player for {}...", host);
    let player = DunePlayer::new(PlayerConfig::new(host));
    println!("✓ Player created (state before first poll: {})", player.state());

    println!("2. Polling device status...");
    player.poll()?;
    println!("✓ Poll finished");

    let snapshot = player.snapshot();
    println!("\nState:    {}", snapshot.state);
    println!("Powered:  {}", if snapshot.is_on() { "on" } else { "off" });
    if let Some(source) = &snapshot.source {
        println!("Source:   {}", source);
    }
    if let Some(title) = &snapshot.media_title {
        println!("Title:    {}", title);
    }
    if let Some(volume) = snapshot.volume_level {
        println!("Volume:   {:.0}%", volume * 100.0);
    }
    if let Some(muted) = snapshot.is_muted {
        println!("Muted:    {}", muted);
    }
    if let (Some(position), Some(duration)) = (snapshot.media_position, snapshot.media_duration) {
        println!("Position: {}s / {}s", position, duration);
    }

    if snapshot.state == PlayerState::Unavailable {
        println!("\n✗ Device unreachable; check the host address");
        return Ok(());
    }

    let features: Vec<_> = snapshot.supported_features.iter().collect();
    println!("\nValid commands right now: {:?}", features);

    Ok(())
}
