//! tablat main entrypoint.

use tablat::run;
use tablat::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
