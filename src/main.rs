//! rTimelane main entrypoint.

use rtimelane::run;
use rtimelane::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
