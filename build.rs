fn main() {
    // Collects git commit and build metadata into OUT_DIR/built.rs.
    built::write_built_file().expect("Failed to acquire build-time information");
}
