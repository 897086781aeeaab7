use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use getopts::Options;

pub struct Args {
    pub address: SocketAddr,
    pub data_file: PathBuf,
    pub enable_cache: bool,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: 127.0.0.1:8080]",
        "SOCKET_ADDRESS",
    );
    opts.optopt(
        "d",
        "data-file",
        "JSON file holding the seeded events and organizers",
        "PATH",
    );
    opts.optflag(
        "c",
        "enable-cache",
        "Enable caching of rendered calendar documents [Default: false]",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let address = match matches.opt_get_default("address", SocketAddr::from(([127, 0, 0, 1], 8080)))
    {
        Ok(address) => address,
        Err(err) => {
            eprintln!("Provided value for option 'address' is invalid: {err}");
            process::exit(1);
        }
    };

    let Some(data_file) = matches.opt_str("data-file") else {
        eprintln!("Option 'data-file' is required");
        eprintln!("{}", opts.short_usage(env!("CARGO_PKG_NAME")));
        process::exit(1);
    };

    let enable_cache = matches.opt_present("enable-cache");

    Args {
        address,
        data_file: PathBuf::from(data_file),
        enable_cache,
    }
}
