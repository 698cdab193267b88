//! rShiftPerf main entrypoint.

use rshiftperf::run;
use rshiftperf::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
