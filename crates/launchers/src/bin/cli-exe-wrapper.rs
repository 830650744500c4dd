use shim::Variant;

fn main() {
    std::process::exit(launchers::run(&Variant::CLI_EXE_WRAPPER));
}
