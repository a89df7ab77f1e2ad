fn main() {
    // ESP-IDF environment is only needed for the firmware image; host
    // builds (unit/integration tests) skip it entirely.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
