// annotree command-line entry point.
// Usage: annotree annotate <FILE> [--parsable] | annotree dump <FILE> --path <PATH>

fn main() {
    annotree::cli::run();
}
