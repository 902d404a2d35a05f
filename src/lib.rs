pub mod bot;
pub mod cards;
pub mod combos;
pub mod evaluation;
pub mod odds;
pub mod table;

/// unit of account for balances, bets, and pots.
pub type Chips = i32;

/// Initializes the logging layer: terminal at Info, timestamped file at Debug.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves forward")
        .as_secs();
    let file = format!("logs/croupier-{}.log", time);
    std::fs::create_dir_all("logs").expect("create log directory");
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(&file).expect("create log file"),
        ),
    ])
    .expect("logger initialization");
}
