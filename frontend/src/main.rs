fn main() {
    thesis_portal::run();
}
