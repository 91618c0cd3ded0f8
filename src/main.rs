fn main() {
    event_showcase_lib::run()
}
