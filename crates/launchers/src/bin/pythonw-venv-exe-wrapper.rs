// No console window for the launcher itself either.
#![cfg_attr(windows, windows_subsystem = "windows")]

use shim::Variant;

fn main() {
    std::process::exit(launchers::run(&Variant::PYTHONW_VENV));
}
