// Same screen, but the message opens in its own "Mensaje" window.
use presioneme::Variant;
use std::process::ExitCode;

fn main() -> ExitCode {
    presioneme::launch(Variant::Dialog)
}
