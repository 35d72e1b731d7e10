fn main() {
    storefront_frontend::start();
}
