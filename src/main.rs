use presioneme::Variant;
use std::process::ExitCode;

fn main() -> ExitCode {
    presioneme::launch(Variant::Inline)
}
