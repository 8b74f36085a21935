//! huellero main entrypoint.

use huellero::run;
use huellero::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
