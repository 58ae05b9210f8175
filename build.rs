fn main() {
    println!("cargo:rerun-if-env-changed=GREENHOUSE_AP_SSID");
    println!("cargo:rerun-if-env-changed=GREENHOUSE_AP_PASSWORD");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
