fn main() {
    ocpi_tariff_model_cli::run();
}
