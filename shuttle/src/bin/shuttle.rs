use clap::Parser;
use shuttle::app::ShuttleApp;

fn main() {
    env_logger::init();
    let args = ShuttleApp::parse();
    match args.run() {
        Ok(output) => {
            println!("{output}");
            log::info!("finished.");
        }
        Err(e) => {
            log::error!("shuttle failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
