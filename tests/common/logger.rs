use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // RUST_LOG=chained_table=debug shows every resize
        let _ = Builder::new()
            .filter_level(LevelFilter::Info)
            .format_timestamp_millis()
            .is_test(true)
            .parse_default_env()
            .try_init();
    });
}
