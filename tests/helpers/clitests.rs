use std::path::Path;

use steam_pricer::display::Display;
use trycmd::TestCases;

pub fn init_cli_test(dir: &Path, base_uri: &str, test_name: &str) -> TestCases {
    // Points to a file that is never created, so no user configuration leaks in.
    let cfg = dir.join("steam-pricer.toml");

    let case = trycmd::TestCases::new();

    case.case(format!("tests/cli/{test_name}/{test_name}.toml"))
        .env("STEAMPRICER_CONFIG", cfg.to_display())
        .env("STEAMPRICER_BASE_API_URL", base_uri)
        .env("STEAMPRICER_NO_COLOR", "1");

    case
}
