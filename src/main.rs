use oarview_cli::display::print_error;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = oarview_cli::run().await {
        print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
