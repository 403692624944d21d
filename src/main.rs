use cerun::config::Config;
use cerun::submit;

#[macro_use]
extern crate log;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::env::set_var("RUST_LOG", "cerun");
    env_logger::init();

    // Env config
    let cfg = Config::from_env();
    trace!("resolved config: {:?}", cfg);

    // First argument is the compiler id, anything after it is ignored
    let compiler_id = match std::env::args().nth(1) {
        Some(id) => id,
        None => {
            print!("{}", submit::USAGE);
            return Ok(());
        }
    };

    // Run the one submission
    let body = submit::run(&cfg, &compiler_id).await?;

    // The response is opaque, whatever the service said goes to stdout as-is
    println!("{}", body);

    Ok(())
}
