//! brewlog main entrypoint.

use brewlog::run;
use brewlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
