use std::env;
use std::process;

use roto::config::Config;

fn main() {
    env_logger::init();

    let cfg = match Config::new(env::args().skip(1).collect()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("roto: {err}");
            eprintln!("usage: roto -point X,Y,Z [-angle DEG] [-axis x|y|z|X,Y,Z] [-info]");
            process::exit(1);
        }
    };

    log::debug!("{cfg}");

    match cfg.run() {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("roto: {err}");
            process::exit(1);
        }
    }
}
