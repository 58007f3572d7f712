use qos_router::cnc::CNC;
use qos_router::utils::config::Arguments;
use qos_router::utils::error::Error;
use qos_router::utils::yaml;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Arguments = argh::from_env();
    if let Err(err) = run(args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: Arguments) -> Result<(), Error> {
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(&args);
    config.validate()?;

    let network = yaml::load_network(&args.network)?;
    let mut cnc = CNC::new(network, config, args.source, args.target)?;

    let (solution, time) = cnc.configure();
    print!("{}", cnc.report(&solution));
    println!("--- computing time: {} μs ---", time);
    Ok(())
}
