mod config;
use config::Config;

fn init_logger() -> anyhow::Result<()> {
    alto_logger::init_alt_term_logger()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from(&[".env", ".env.dev"]);
    init_logger()?;

    let config = Config::load()?;
    let dispatcher = config.dispatcher();

    // arguments that aren't utf-8 are still matched, just lossily
    let args = std::env::args_os()
        .map(|s| s.to_string_lossy().into_owned())
        .collect::<Vec<_>>();

    let dispatched = dispatcher.run(&args);
    log::debug!("matched '{}'", dispatched.name());

    let values = dispatched.values().collect::<Vec<_>>();
    match &*values {
        [(_, value)] => println!("{}", value),
        values => {
            for (short, value) in values {
                println!("{}={}", short, value);
            }
        }
    }

    Ok(())
}
