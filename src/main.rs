use janggi::game_state::game_config::GameConfig;
use janggi::game_state::janggi_types::Color;
use janggi::protocol::text_protocol::run_stdio_loop;

fn main() -> std::io::Result<()> {
    let mut config = GameConfig::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--red-first" => config = GameConfig::with_first_mover(Color::Red),
            other => eprintln!("ignoring unknown argument '{other}'"),
        }
    }

    run_stdio_loop(config)
}
