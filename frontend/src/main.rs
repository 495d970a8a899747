fn main() {
    kintai_frontend::start();
}
