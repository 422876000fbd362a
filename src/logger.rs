use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_PATTERN: &str = "{d(%H:%M:%S%.3f)} {l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    // without a readable config file only warnings reach stderr
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_err() {
        init_fallback();
    }
}

fn init_fallback() {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match config.map(log4rs::init_config) {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => eprintln!("Logger already initialised: {}", e),
        Err(e) => eprintln!("Invalid fallback logger configuration: {}", e),
    }
}
