use shim::Variant;

fn main() {
    std::process::exit(launchers::run(&Variant::PYTHON_SCRIPTS));
}
