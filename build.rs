fn main() {
    // Forward ESP-IDF sysenv only for device builds; host test builds have
    // no ESP-IDF toolchain to query.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
